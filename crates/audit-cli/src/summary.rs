use audit_cli::tables::stats_table;

use crate::types::AuditResult;

pub fn print_result(result: &AuditResult) {
    println!("Report: {}", result.report_path.display());
    if let Some(replay) = &result.replay {
        println!(
            "Scans: {} matched, {} extra, {} already scanned, {} repeats ignored",
            replay.matched, replay.extra, replay.already_scanned, replay.debounced
        );
    }
    println!("{}", stats_table(&result.stats));
    if let Some(summary) = &result.summary {
        println!();
        println!("AI summary:");
        println!("{summary}");
    }
}
