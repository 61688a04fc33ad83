pub const PROGRAM_NAME: &str = "bdf2csv";
pub const PROGRAM_VERSION: &str = "v1.0.1";
pub const PROGRAM_LOG_LEVEL: &str = "BDF2CSV_LOG_LEVEL";
