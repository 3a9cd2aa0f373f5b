use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use folio_core::BackdropConfig;
use folio_page::Backdrop;

pub fn run(frames: u64, width: f64, height: f64, seed: u64, particles: usize) -> Result<(), String> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(format!("viewport must be positive, got {width}x{height}"));
    }
    let config = BackdropConfig::default()
        .with_seed(seed)
        .with_particle_count(particles);
    config
        .validate()
        .map_err(|e| format!("invalid backdrop: {e}"))?;

    let mut backdrop = Backdrop::new(config, width, height);
    let initial = backdrop.links().len();

    let mut min_links = initial;
    let mut max_links = initial;
    let mut total_links = 0usize;
    for _ in 0..frames {
        backdrop.step();
        let links = backdrop.links().len();
        min_links = min_links.min(links);
        max_links = max_links.max(links);
        total_links += links;
    }
    let mean = if frames == 0 {
        initial as f64
    } else {
        total_links as f64 / frames as f64
    };

    println!(
        "  {} {}",
        "Backdrop".bold(),
        format!("({frames} frames, seed={seed}, {width}x{height})").dimmed()
    );
    println!();

    let config = backdrop.config();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Particles".to_string(), backdrop.particles().len().to_string()]);
    table.add_row(vec![
        "Link threshold".to_string(),
        format!("{:.1} px²", backdrop.link_threshold()),
    ]);
    table.add_row(vec!["Links at start".to_string(), initial.to_string()]);
    table.add_row(vec![
        "Links at end".to_string(),
        backdrop.links().len().to_string(),
    ]);
    table.add_row(vec!["Min links".to_string(), min_links.to_string()]);
    table.add_row(vec!["Max links".to_string(), max_links.to_string()]);
    table.add_row(vec!["Mean links".to_string(), format!("{mean:.1}")]);
    table.add_row(vec!["Particle color".to_string(), config.particle_color.clone()]);
    table.add_row(vec!["Line color".to_string(), config.line_color.clone()]);

    println!("{table}");
    Ok(())
}
