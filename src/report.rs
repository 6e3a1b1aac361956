//! Human-readable run summary.

use crate::generator::GenerationReport;

pub fn print_summary(report: &GenerationReport) {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("  Configuration generated");
    println!("{rule}");
    println!();

    println!("Generated files:");
    let mut files = vec![
        ("Server config", &report.server_config),
        ("Linux client", &report.linux_config),
        ("Android client", &report.android_config),
    ];
    if let Some(qr) = &report.qr_code {
        files.push(("QR code", qr));
    }
    for (i, (label, path)) in files.iter().enumerate() {
        println!("  {}. {label}: {}", i + 1, path.display());
    }
    println!();

    println!("Share link:");
    println!("  {}", report.share_link);
    println!();

    println!("Usage:");
    println!("  Linux:   hysteria client -c client_linux.yaml");
    println!("  Android: import client_android.json into the Hysteria app");
    if report.qr_code.is_some() {
        println!("  Scan:    scan qrcode.png with the Hysteria app");
    }
    println!();

    println!("Start the server:");
    println!("  sudo hysteria server -c {}", report.server_config.display());
    println!();

    println!("Notes:");
    println!("  1. Keep the generated files somewhere safe");
    println!("  2. Back up the passwords and certificate files");
    println!(
        "  3. Open these ports in the server firewall: 80/tcp, {port}/udp, {port}/tcp",
        port = report.identity.port
    );
    println!();

    if report.is_degraded() {
        println!("Degraded steps:");
        for d in &report.degraded {
            println!("  - {}: {}", d.step, d.reason);
        }
        println!();
    }
}
