// src/config/consts.rs

// Site
pub const COURSE_BASE_URL: &str = "http://kurser.dtu.dk/course/";

// Local layout (relative to the project root)
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_EXTENSION_DIR: &str = "extension";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_LOGS_DIR: &str = "logs";

pub const COURSE_DATA_FILE: &str = "coursedic.json";
pub const ANALYZED_DATA_FILE: &str = "data.json";
pub const LOG_FILE: &str = "analyzer.log";

// Extension outputs (relative to the extension folder)
pub const EXT_DATA_JS: &str = "db/data.js";
pub const EXT_TABLE_HTML: &str = "db.html";
pub const EXT_INIT_TABLE_JS: &str = "js/init_table.js";

pub const TEMPLATE_TABLE_HTML: &str = "db.html";
pub const TEMPLATE_INIT_TABLE_JS: &str = "init_table.js";

// Environment
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_ROOT: &str = "ANALYZER_ROOT";

// Sheet selection
pub const MIN_PARTICIPANTS: i64 = 5;
pub const SHEET_RATIO: i64 = 2;

// Raw sheet keys
pub const CAT_GRADES: &str = "grades";
pub const CAT_REVIEWS: &str = "reviews";
pub const CAT_NAME: &str = "name";
pub const CAT_NAME_EN: &str = "name_en";

pub const KEY_PARTICIPANTS: &str = "participants";
pub const KEY_PASS_PERCENTAGE: &str = "pass_percentage";
pub const KEY_AVG: &str = "avg";
pub const KEY_FIRST_OPTION: &str = "firstOption";
pub const KEY_TIMESTAMP: &str = "timestamp";
pub const KEY_QUESTION: &str = "question";

pub const QUESTION_QUALITY: &str = "1.1";
pub const QUESTION_WORKLOAD: &str = "2.1";

// First answer label on the evaluation page
pub const LABEL_STRONGLY_DISAGREE: &str = "Helt uenig";
pub const LABEL_STRONGLY_AGREE: &str = "Helt enig";

/// Grade buckets copied into the output, in display order.
pub const GRADE_BUCKETS: [&str; 7] = ["-3", "00", "02", "4", "7", "10", "12"];

// Validation
pub const MIN_COURSES: usize = 500;
pub const COURSE_ID_LEN: usize = 5;
pub const AVG_RANGE: (f64, f64) = (-3.0, 12.0);
pub const MIN_GRADE_SHARE: f64 = 50.0;
pub const MIN_REVIEW_SHARE: f64 = 30.0;
pub const MIN_NAME_SHARE: f64 = 90.0;
pub const MAX_SAME_NAME_SHARE: f64 = 95.0;
