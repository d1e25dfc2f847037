pub mod canvas;
pub mod fragment;
pub mod greeting;
pub mod scene;
pub mod snow;
