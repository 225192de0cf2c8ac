//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{BenchmarkResult, TopicRegistry, TopicRunner};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: original (0), Rust (1), C by compiler then name (2)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == "original" {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust strategies, then C
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application header
pub fn print_header(title: &str) {
    let term_width = get_term_width().min(80);
    let title = format!(" {title} ");
    let title_len = title.chars().count();
    let padding = term_width.saturating_sub(title_len + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title_len);

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print topic info box
pub fn print_topic_info_box(topic: &dyn TopicRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants = topic.available_variants();
    let name_line = format!("Topic:     {}", topic.name());
    let cat_line = format!("Category:  {}", topic.category());
    let desc_line = topic.description();
    let var_line = if variants.is_empty() {
        "Variants:  (none)".to_string()
    } else {
        format!("Variants:  {}", variants.join(", "))
    };

    let content_width = [
        name_line.as_str(),
        cat_line.as_str(),
        desc_line,
        var_line.as_str(),
    ]
    .iter()
    .map(|line| line.chars().count())
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let row = |line: &str| {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        )
    };

    println!("┌{}┐", border);
    row(&name_line);
    row(&cat_line);
    row(desc_line);
    println!("├{}┤", border);
    row(&var_line);
    println!("└{}┘", border);
    println!();
}

/// Print the list of available topics
pub fn print_available_topics(registry: &TopicRegistry) {
    println!("Available topics:");
    println!();
    for topic in registry.all() {
        println!(
            "  {:<12} [{}] - {}",
            topic.name(),
            topic.category(),
            topic.description()
        );
    }
}

/// Print a topic's demonstration lines under its info box
pub fn print_demonstration(topic: &dyn TopicRunner) {
    print_topic_info_box(topic);
    for line in topic.demonstrate() {
        println!("  {line}");
    }
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize) {
    let variant_col_width = get_term_width().saturating_sub(85).max(15);
    for line in format_results_table(results, size, variant_col_width) {
        println!("{line}");
    }
}

/// Lines of the results table, followed by a legend with each variant's description.
/// The first result is the baseline for speedup and relative error.
pub fn format_results_table(
    results: &[BenchmarkResult],
    size: usize,
    variant_col_width: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    let Some(baseline) = results.first() else {
        return lines;
    };

    let table_width = variant_col_width + 77 + 7;
    let baseline_time = baseline.avg_time.as_nanos() as f64;
    let baseline_result = baseline.result_sample;

    lines.push(format!("  Size: {} ({} runs)", size, baseline.runs));
    lines.push(format!("  {}", "─".repeat(table_width)));
    lines.push(format!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    ));
    lines.push(format!("  {}", "─".repeat(table_width)));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let (speedup, cv) = if avg_ns > 0.0 {
            (
                baseline_time / avg_ns,
                result.std_dev.as_nanos() as f64 / avg_ns,
            )
        } else {
            (0.0, 0.0)
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        lines.push(format!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name(result), variant_col_width),
            format!("{:?}", result.avg_time),
            format!("{:?}", result.median_time),
            format!("{:?}", result.min_time),
            format!("{:?}", result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        ));
    }

    lines.push(String::new());
    for result in results {
        lines.push(format!("  {}: {}", result.name, result.description));
    }
    lines.push(String::new());
    lines
}

fn display_name(result: &BenchmarkResult) -> String {
    match crate::utils::C_COMPILER_NAME {
        Some(c) if result.name.starts_with("c-") => format!("{} ({})", result.name, c),
        _ => result.name.clone(),
    }
}

/// Print benchmark tables grouped by topic and size
pub fn print_grouped_results(
    topics: &[&dyn TopicRunner],
    sizes: &[usize],
    results: &[Vec<Vec<BenchmarkResult>>],
) {
    for (topic, per_size) in topics.iter().zip(results) {
        if per_size.iter().all(Vec::is_empty) {
            continue;
        }
        print_topic_info_box(*topic);

        for (&size, size_results) in sizes.iter().zip(per_size) {
            let mut sorted = size_results.clone();
            sort_variants(&mut sorted);
            print_results_table(&sorted, size);
        }
    }
}
