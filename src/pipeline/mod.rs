pub mod stage1_extract;
pub mod stage2_format;
pub mod stage3_verdict;
pub mod stage4_report;
