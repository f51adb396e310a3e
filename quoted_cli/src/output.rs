use anyhow::Result;
use quoted_lib::types::{EpisodeSummary, Quote, SeasonSummary, ShowSummary};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ShowRow {
    #[tabled(rename = "Show")]
    #[serde(rename = "Show")]
    name: String,
    #[tabled(rename = "Quotes")]
    #[serde(rename = "Quotes")]
    quotes: String,
}

#[derive(Tabled, Serialize)]
struct SeasonRow {
    #[tabled(rename = "Season")]
    #[serde(rename = "Season")]
    season: i32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Quotes")]
    #[serde(rename = "Quotes")]
    quotes: String,
}

#[derive(Tabled, Serialize)]
struct EpisodeRow {
    #[tabled(rename = "Episode")]
    #[serde(rename = "Episode")]
    episode: i32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Quotes")]
    #[serde(rename = "Quotes")]
    quotes: String,
}

#[derive(Tabled, Serialize)]
struct QuoteRow {
    #[tabled(rename = "Show")]
    #[serde(rename = "Show")]
    show: String,
    #[tabled(rename = "Season")]
    #[serde(rename = "Season")]
    season: i32,
    #[tabled(rename = "Episode")]
    #[serde(rename = "Episode")]
    episode: i32,
    #[tabled(rename = "Quote")]
    #[serde(rename = "Quote")]
    quote: String,
}

// -- Row builders --

fn build_show_rows(shows: &[ShowSummary]) -> Vec<ShowRow> {
    shows
        .iter()
        .map(|s| ShowRow {
            name: s.name.clone(),
            quotes: format_count(s.quote_count),
        })
        .collect()
}

fn build_season_rows(seasons: &[SeasonSummary]) -> Vec<SeasonRow> {
    seasons
        .iter()
        .map(|s| SeasonRow {
            season: s.season_no,
            name: s.season_name.clone().unwrap_or_default(),
            quotes: format_count(s.quote_count),
        })
        .collect()
}

fn build_episode_rows(episodes: &[EpisodeSummary]) -> Vec<EpisodeRow> {
    episodes
        .iter()
        .map(|e| EpisodeRow {
            episode: e.episode_no,
            name: e.episode_name.clone().unwrap_or_default(),
            quotes: format_count(e.quote_count),
        })
        .collect()
}

fn build_quote_rows(quotes: &[Quote]) -> Vec<QuoteRow> {
    quotes
        .iter()
        .map(|q| QuoteRow {
            show: q.show_name.clone(),
            season: q.season_no,
            episode: q.episode_no,
            quote: format_dialogue(q),
        })
        .collect()
}

// -- Printers --

pub fn print_shows(shows: &[ShowSummary], format: &OutputFormat) -> Result<()> {
    emit(build_show_rows(shows), shows, format)
}

pub fn print_seasons(seasons: &[SeasonSummary], format: &OutputFormat) -> Result<()> {
    emit(build_season_rows(seasons), seasons, format)
}

pub fn print_episodes(episodes: &[EpisodeSummary], format: &OutputFormat) -> Result<()> {
    emit(build_episode_rows(episodes), episodes, format)
}

pub fn print_quotes(quotes: &[Quote], format: &OutputFormat) -> Result<()> {
    emit(build_quote_rows(quotes), quotes, format)
}

/// A single quote reads better as text than as a one-row table.
pub fn print_quote(quote: &Quote, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", format_quote(quote));
            Ok(())
        }
        OutputFormat::Json => {
            print_json(quote);
            Ok(())
        }
        OutputFormat::Csv => print_csv(build_quote_rows(std::slice::from_ref(quote))),
    }
}

fn emit<R, D>(rows: Vec<R>, data: &D, format: &OutputFormat) -> Result<()>
where
    R: Tabled + Serialize,
    D: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => {
            println!("{}", Table::new(rows));
            Ok(())
        }
        OutputFormat::Json => {
            print_json(data);
            Ok(())
        }
        OutputFormat::Csv => print_csv(rows),
    }
}

fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Text formatting --

fn format_count(count: Option<u64>) -> String {
    count.map(|c| c.to_string()).unwrap_or_default()
}

fn numbered(label: &str, number: i32, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} {} - {}", label, number, name),
        None => format!("{} {}", label, number),
    }
}

/// The parts of a quote in speaking order. A lone part is just its text;
/// several parts are prefixed with the speaker.
fn format_dialogue(quote: &Quote) -> String {
    let parts = quote.ordered_parts();
    if let [only] = parts.as_slice() {
        return only.quote_text.clone();
    }
    parts
        .iter()
        .map(|p| format!("{}: {}", p.character_name, p.quote_text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// e.g.
///
/// ```text
/// It's OK to lie to women. They're not people like us.
///
/// Peter Griffin
/// Family Guy
/// Season 1
/// Episode 1 - Death Has a Shadow
/// ```
pub fn format_quote(quote: &Quote) -> String {
    let season = numbered("Season", quote.season_no, quote.season_name.as_deref());
    let episode = numbered("Episode", quote.episode_no, quote.episode_name.as_deref());
    let parts = quote.ordered_parts();
    match parts.as_slice() {
        [only] => format!(
            "{}\n\n{}\n{}\n{}\n{}",
            only.quote_text, only.character_name, quote.show_name, season, episode
        ),
        _ => format!(
            "{}\n\n{}\n{}\n{}",
            format_dialogue(quote),
            quote.show_name,
            season,
            episode
        ),
    }
}

/// `1 2 [3] 4`, with the current page bracketed.
pub fn format_page_strip(pages: &[u32], current: u32) -> String {
    pages
        .iter()
        .map(|&p| {
            if p == current {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use quoted_lib::quoted_api::casing::to_app_case;
    use quoted_lib::types::PagedResponse;

    use super::*;

    fn load_quotes_fixture() -> Vec<Quote> {
        let json_str = include_str!("../../quoted_api/tests/fixtures/quotes.json");
        let resp: PagedResponse<Quote> =
            serde_json::from_value(to_app_case(serde_json::from_str(json_str).unwrap())).unwrap();
        resp.data
    }

    fn load_random_fixture() -> Quote {
        let json_str = include_str!("../../quoted_api/tests/fixtures/random_quote.json");
        serde_json::from_value(to_app_case(serde_json::from_str(json_str).unwrap())).unwrap()
    }

    fn load_shows_fixture() -> Vec<ShowSummary> {
        let json_str = include_str!("../../quoted_api/tests/fixtures/shows.json");
        let resp: PagedResponse<ShowSummary> =
            serde_json::from_value(to_app_case(serde_json::from_str(json_str).unwrap())).unwrap();
        resp.data
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Table);
    }

    #[test]
    fn test_format_single_part_quote() {
        let quote = load_random_fixture();
        assert_eq!(
            format_quote(&quote),
            "It's OK to lie to women. They're not people like us.\n\n\
             Peter Griffin\nFamily Guy\nSeason 1\nEpisode 1 - Death Has a Shadow"
        );
    }

    #[test]
    fn test_format_multi_part_quote_orders_parts() {
        let quote = &load_quotes_fixture()[0];
        let text = format_quote(quote);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Philip J. Fry: Does anybody"));
        assert!(lines.next().unwrap().starts_with("Bender Rodriguez: I haven't"));
        assert!(text.ends_with("Futurama\nSeason 6\nEpisode 2 - In-A-Gadda-Da-Leela"));
    }

    #[test]
    fn test_build_show_rows() {
        let rows = build_show_rows(&load_shows_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Family Guy");
        assert_eq!(rows[0].quotes, "42");
    }

    #[test]
    fn test_build_season_rows_missing_name() {
        let rows = build_season_rows(&[SeasonSummary {
            season_no: 4,
            season_name: None,
            quote_count: None,
        }]);
        assert_eq!(rows[0].season, 4);
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].quotes, "");
    }

    #[test]
    fn test_build_episode_rows() {
        let rows = build_episode_rows(&[EpisodeSummary {
            episode_no: 2,
            episode_name: Some("In-A-Gadda-Da-Leela".into()),
            quote_count: Some(3),
        }]);
        assert_eq!(rows[0].episode, 2);
        assert_eq!(rows[0].name, "In-A-Gadda-Da-Leela");
        assert_eq!(rows[0].quotes, "3");
    }

    #[test]
    fn test_build_quote_rows() {
        let rows = build_quote_rows(&load_quotes_fixture());
        assert_eq!(rows[0].show, "Futurama");
        assert_eq!(rows[0].quote.lines().count(), 2);
    }

    #[test]
    fn test_build_rows_empty() {
        assert!(build_show_rows(&[]).is_empty());
        assert!(build_quote_rows(&[]).is_empty());
    }

    #[test]
    fn test_page_strip() {
        assert_eq!(format_page_strip(&[1, 2, 3, 4], 3), "1 2 [3] 4");
        assert_eq!(format_page_strip(&[1], 1), "[1]");
        assert_eq!(format_page_strip(&[], 1), "");
    }
}
