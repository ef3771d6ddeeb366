//! Report rendering for the console and for JSON output

use console::{measure_text_width, pad_str, Alignment, Style};
use howtypedlib::{
    rating_for, totals_for_language, Counts, FileStatistics, Language,
    LanguageDistributionPercentages, Rating,
};

/// Printed instead of a report when nothing was counted
pub const NO_FILES_MESSAGE: &str = "🙅 No JavaScript or TypeScript files found in the directory";

const HEADER_PADDING: usize = 4;
const LOGO_WIDTH: usize = 16;
const SUBHEADING_UNDERLINE: char = '\u{2015}';

// 256-colour approximations of the TypeScript and JavaScript brand colours
const TS_LOGO_COLOUR: u8 = 32;
const JS_LOGO_COLOUR: u8 = 221;

/// Serialize the counts as pretty-printed JSON
pub fn render_json(counts: &Counts) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(counts)?;
    output.push('\n');
    Ok(output)
}

/// Render the report in the requested format.
///
/// When nothing was counted, both formats print the no-files notice instead.
pub fn render(title: &str, counts: &Counts, json: bool) -> Result<String, serde_json::Error> {
    if counts.is_empty() {
        return Ok(format!("{}\n", Style::new().red().apply_to(NO_FILES_MESSAGE)));
    }
    if json {
        return render_json(counts);
    }
    Ok(render_report(title, counts))
}

/// Render the full console report: header box, table and summary
pub fn render_report(title: &str, counts: &Counts) -> String {
    let mut output = render_header(title);
    output.push_str(&render_table(counts));
    output.push_str(&render_summary(counts));
    output
}

/// Centre `text` (measured without ANSI codes) inside `width` columns
fn centre(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Center, None).into_owned()
}

/// Bordered banner with the TS vs JS badge and the report title
pub fn render_header(title: &str) -> String {
    let ts = Style::new().bold().on_color256(TS_LOGO_COLOUR);
    let js = Style::new().bold().on_color256(JS_LOGO_COLOUR);

    let logo_top = format!("{}    {}", ts.apply_to("      "), js.apply_to("      "));
    let logo_bottom = format!(
        "{} vs {}",
        ts.clone().white().apply_to("   TS "),
        js.clone().black().apply_to("   JS ")
    );
    let title = Style::new().bold().apply_to(title).to_string();

    let row_width = measure_text_width(&title).max(LOGO_WIDTH) + HEADER_PADDING * 2;
    let horizontal = "\u{2550}".repeat(row_width);

    let mut output = String::from("\n");
    output.push_str(&format!("\u{2554}{horizontal}\u{2557}\n"));
    for row in [logo_top, logo_bottom, String::new(), title] {
        output.push_str(&format!("\u{2551}{}\u{2551}\n", centre(&row, row_width)));
    }
    output.push_str(&format!("\u{255A}{horizontal}\u{255D}\n\n"));
    output
}

/// A percentage as `NN.NN%`, coloured by its rating
pub fn format_percentage(percentage: f64) -> String {
    let rating = rating_for(percentage);
    rating_style(rating)
        .apply_to(format!("{percentage:.2}%"))
        .to_string()
}

/// A rating label, coloured, followed by its emoji
pub fn format_rating(rating: &Rating) -> String {
    format!("{} {}", rating_style(rating).apply_to(rating.label), rating.emoji)
}

fn rating_style(rating: &Rating) -> Style {
    Style::new()
        .bold()
        .color256(rating.fg)
        .on_color256(rating.bg)
}

const COLUMN_COUNT: usize = 7;

type TableRow = [String; COLUMN_COUNT];

/// The two rows (Files, LoC) shown for one category or for the overall totals
fn build_block(
    title: &str,
    js: FileStatistics,
    ts: FileStatistics,
    total: FileStatistics,
    percentages: &LanguageDistributionPercentages,
    score: f64,
    bold: bool,
) -> [TableRow; 2] {
    let cell = |value: String| {
        if bold {
            Style::new().bold().apply_to(value).to_string()
        } else {
            value
        }
    };

    [
        [
            cell(title.to_string()),
            cell("Files".to_string()),
            cell(js.files.to_string()),
            cell(ts.files.to_string()),
            cell(total.files.to_string()),
            cell(format_percentage(percentages.files.ts)),
            cell(format_rating(rating_for(score))),
        ],
        [
            String::new(),
            cell("LoC".to_string()),
            cell(js.loc.to_string()),
            cell(ts.loc.to_string()),
            cell(total.loc.to_string()),
            cell(format_percentage(percentages.loc.ts)),
            String::new(),
        ],
    ]
}

fn table_headings() -> TableRow {
    let heading = Style::new().bold().blue().bright();
    let js = Style::new().bold().black().on_yellow();
    let ts = Style::new().bold().white().on_blue();

    [
        heading.apply_to("File Type").to_string(),
        heading.apply_to("Metric").to_string(),
        js.apply_to(" JS").to_string(),
        ts.apply_to(" TS").to_string(),
        heading.apply_to("Total").to_string(),
        format!("{} {}", ts.apply_to(" TS"), heading.apply_to("%")),
        heading.apply_to("Rating").to_string(),
    ]
}

fn border(widths: &[usize; COLUMN_COUNT], left: char, middle: char, right: char) -> String {
    let middle = middle.to_string();
    let segments: Vec<String> = widths.iter().map(|w| "\u{2500}".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(middle.as_str()))
}

fn table_line(row: &TableRow, widths: &[usize; COLUMN_COUNT]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {} ", pad_str(cell, *width, Alignment::Left, None)))
        .collect();
    format!("\u{2502}{}\u{2502}\n", cells.join("\u{2502}"))
}

/// Table with one block per non-empty category plus an OVERALL block
pub fn render_table(counts: &Counts) -> String {
    let mut blocks: Vec<[TableRow; 2]> = counts
        .filetypes
        .values()
        .filter(|category| !category.is_empty())
        .map(|category| {
            build_block(
                &category.label,
                category.js,
                category.ts,
                category.total,
                &category.percentages,
                category.score,
                false,
            )
        })
        .collect();

    blocks.push(build_block(
        "OVERALL",
        totals_for_language(counts, Language::Js),
        totals_for_language(counts, Language::Ts),
        counts.total,
        &counts.percentages,
        counts.score,
        true,
    ));

    let headings = table_headings();
    let mut widths = [0usize; COLUMN_COUNT];
    for row in std::iter::once(&headings).chain(blocks.iter().flatten()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut output = border(&widths, '\u{250C}', '\u{252C}', '\u{2510}');
    output.push_str(&table_line(&headings, &widths));
    for block in &blocks {
        output.push_str(&border(&widths, '\u{251C}', '\u{253C}', '\u{2524}'));
        for row in block {
            output.push_str(&table_line(row, &widths));
        }
    }
    output.push_str(&border(&widths, '\u{2514}', '\u{2534}', '\u{2518}'));
    output
}

/// Underlined section heading
pub fn render_subheader(title: &str) -> String {
    let underline: String = std::iter::repeat(SUBHEADING_UNDERLINE)
        .take(title.chars().count())
        .collect();
    let style = Style::new().bold().blue();
    format!("\n{}\n{}\n", style.apply_to(title), style.apply_to(underline))
}

/// One-sentence summary of the overall TypeScript share
pub fn render_summary(counts: &Counts) -> String {
    let files = counts.percentages.files.ts;
    let loc = counts.percentages.loc.ts;
    let bold = Style::new().bold();

    let mut output = render_subheader("Summary");
    output.push_str(&format!(
        "Overall, {} of files and {} of lines of code (LoC) are written in TypeScript, \
         earning a {} rating for file coverage and a {} rating for LoC coverage.\n",
        bold.apply_to(format_percentage(files)),
        bold.apply_to(format_percentage(loc)),
        bold.apply_to(format_rating(rating_for(files))),
        format_rating(rating_for(loc)),
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use howtypedlib::FileType;

    fn plain_output() {
        console::set_colors_enabled(false);
    }

    fn sample_counts() -> Counts {
        let mut counts = Counts::new();
        counts.record(FileType::Plain, Language::Ts, 3);
        counts.record(FileType::Plain, Language::Js, 1);
        counts.with_scores()
    }

    #[test]
    fn test_render_json_is_full_structure() {
        let counts = sample_counts();
        let json = render_json(&counts).unwrap();

        assert!(json.starts_with("{\n  \"filetypes\""));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["total"]["files"], 2);
        assert_eq!(parsed["filetypes"]["plain"]["ts"]["loc"], 3);
        assert_eq!(parsed["score"], 67.5);
    }

    #[test]
    fn test_empty_counts_print_notice() {
        plain_output();
        let counts = Counts::new().with_scores();

        assert_eq!(render("title", &counts, false).unwrap(), format!("{NO_FILES_MESSAGE}\n"));
        assert_eq!(render("title", &counts, true).unwrap(), format!("{NO_FILES_MESSAGE}\n"));
    }

    #[test]
    fn test_render_selects_format() {
        plain_output();
        let counts = sample_counts();

        assert!(render("title", &counts, true).unwrap().starts_with('{'));
        assert!(render("title", &counts, false).unwrap().contains("OVERALL"));
    }

    #[test]
    fn test_format_percentage() {
        plain_output();

        assert_eq!(format_percentage(75.0), "75.00%");
        assert_eq!(format_percentage(33.33), "33.33%");
    }

    #[test]
    fn test_format_rating() {
        plain_output();

        assert_eq!(format_rating(rating_for(95.0)), "Excellent 🚀");
        assert_eq!(format_rating(rating_for(10.0)), "Poor 😞");
    }

    #[test]
    fn test_header_box() {
        plain_output();
        let header = render_header("Report for 'demo'");
        let lines: Vec<&str> = header.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('\u{2554}'));
        assert!(lines[2].contains("TS  vs    JS"));
        assert!(lines[4].contains("Report for 'demo'"));
        assert!(lines[5].starts_with('\u{255A}'));

        let width = measure_text_width(lines[0]);
        for line in &lines {
            assert_eq!(measure_text_width(line), width);
        }
    }

    #[test]
    fn test_table_rows() {
        plain_output();
        let table = render_table(&sample_counts());

        assert!(table.contains("File Type"));
        assert!(table.contains("Plain JS/TS"));
        assert!(!table.contains("Vue SFC"));
        assert!(table.contains("OVERALL"));
        assert!(table.contains("50.00%"));
        assert!(table.contains("75.00%"));
        assert!(table.contains("Good 👍"));

        let width = measure_text_width(table.lines().next().unwrap());
        for line in table.lines() {
            assert_eq!(measure_text_width(line), width, "{line}");
        }
    }

    #[test]
    fn test_summary_sentence() {
        plain_output();
        let summary = render_summary(&sample_counts());

        assert!(summary.contains("Summary"));
        assert!(summary.contains(
            "Overall, 50.00% of files and 75.00% of lines of code (LoC) are written in TypeScript, \
             earning a Fair 🤝 rating for file coverage and a Great 🎉 rating for LoC coverage."
        ));
    }
}
