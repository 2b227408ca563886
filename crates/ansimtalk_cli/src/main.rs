//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ansimtalk_core` linkage.
//! - Print the sample schedule summary deterministically.

use ansimtalk_core::seed::sample_medications;
use ansimtalk_core::MedicationService;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("ansimtalk_core ping={}", ansimtalk_core::ping());
    println!("ansimtalk_core version={}", ansimtalk_core::core_version());

    let service = match MedicationService::with_records(sample_medications()) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("sample seed rejected: {err}");
            return ExitCode::FAILURE;
        }
    };
    for record in service.list() {
        let mark = if record.taken { "x" } else { " " };
        println!("[{mark}] {} {}", record.scheduled_time, record.name);
    }
    let summary = service.summarize();
    println!(
        "summary={} status={}",
        summary.progress_label(),
        summary.status().label()
    );
    ExitCode::SUCCESS
}
