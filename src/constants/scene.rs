pub const BLANK: char = ' ';
pub const SNOWFLAKE: char = '.';
pub const SNOWFLAKE_COUNT: usize = 85;

// Church with steeple, stamped at column 4.
pub const CHURCH_COLUMN: usize = 4;
pub const CHURCH_WIDTH: usize = 11;
pub const CHURCH_ROWS: [(usize, &str); 8] = [
    (6, "    ++     "),
    (7, "    ||     "),
    (8, "   /  \\    "),
    (9, "  /____\\   "),
    (10, "  | [] |   "),
    (11, "  | [] |   "),
    (12, "  | __ |   "),
    (13, "  |____|   "),
];

// Tree on the right, stamped at column 40.
pub const TREE_COLUMN: usize = 40;
pub const TREE_WIDTH: usize = 10;
pub const TREE_ROWS: [(usize, &str); 7] = [
    (8, "    *     "),
    (9, "   /_\\    "),
    (10, "  /_/_\\   "),
    (11, " /_/_/_\\  "),
    (12, "/_/_/_/_\\ "),
    (13, "   /_\\    "),
    (14, "   /_\\    "),
];
