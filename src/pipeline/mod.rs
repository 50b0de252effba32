pub mod stage1_scores;
pub mod stage2_evaluate;
pub mod stage3_report;
