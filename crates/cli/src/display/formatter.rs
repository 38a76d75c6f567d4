use sitepack_core::{Placement, PlacementKind, RemovalOutcome};

/// One line per placement: `source -> destination  [reason]`
pub fn format_placement(source: &str, placement: &Placement) -> String {
    let marker = match placement.kind {
        PlacementKind::Relocated => "➡️ ",
        _ => "  ",
    };
    format!(
        "{} {} -> {}  [{}]",
        marker, source, placement.path, placement.kind
    )
}

pub fn print_placement(source: &str, placement: &Placement) {
    println!("{}", format_placement(source, placement));
}

pub fn format_removal(name: &str, outcome: &RemovalOutcome) -> String {
    match outcome {
        RemovalOutcome::MarkerDeleted(marker) => {
            format!("✅ Removed reference '{}' ({})", name, marker)
        }
        RemovalOutcome::MarkerKept(marker) => {
            format!("⚠️  Could not delete {} for reference '{}'", marker, name)
        }
        RemovalOutcome::Delegated => {
            format!("✅ Removed reference '{}' through the host", name)
        }
    }
}
