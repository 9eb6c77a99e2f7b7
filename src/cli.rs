use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{MultiSelect, Select, Text};

use crate::models::query::QueryParams;
use crate::render::{View, render_outcome};
use crate::service::event_service::EventService;
use crate::service::query_builder::ALL_CATEGORIES;

const MAX_RANGE_DAYS: i64 = 180;
const DEFAULT_LIMIT: u32 = 20;

const PERIOD_CHOICES: [(&str, i64); 5] = [
    ("1週間", 7),
    ("2週間", 14),
    ("1ヶ月", 30),
    ("3ヶ月", 90),
    ("6ヶ月", 180),
];

const CATEGORY_CHOICES: [&str; 8] = [
    ALL_CATEGORIES,
    "音楽",
    "アート",
    "テクノロジー",
    "ビジネス",
    "スポーツ",
    "食べ物",
    "その他",
];

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Fetch {
        start: NaiveDate,
        end: NaiveDate,
        #[arg(long, value_delimiter = ',')]
        categories: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
        #[arg(long)]
        table: bool,
    },
    FetchPrompt {},
}

pub async fn cli(service: EventService) {
    // Fine to panic here
    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch {
            start,
            end,
            categories,
            limit,
            table,
        } => {
            let (start, end) = clamp_range(start, end);
            let params = QueryParams {
                start_date: start,
                end_date: end,
                category_filters: if categories.is_empty() {
                    None
                } else {
                    Some(categories)
                },
                result_limit: limit,
            };
            let outcome = service.fetch(&params).await;
            let view = if table { View::Table } else { View::Cards };
            print!("{}", render_outcome(&outcome, view));
        }
        Commands::FetchPrompt {} => match prompt_params() {
            Ok(params) => {
                let outcome = service.fetch(&params).await;
                print!("{}", render_outcome(&outcome, View::Cards));
            }
            Err(e) => println!("入力を取得できませんでした: {}", e),
        },
    }
}

// The range discipline lives on this side of the fetch boundary: the core
// assumes start <= end and a bounded span.
fn clamp_range(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = if end < start { start } else { end };
    if (end - start).num_days() > MAX_RANGE_DAYS {
        println!("期間は最大6ヶ月({}日)まで指定可能です。", MAX_RANGE_DAYS);
        (start, start + Duration::days(MAX_RANGE_DAYS))
    } else {
        (start, end)
    }
}

fn prompt_params() -> Result<QueryParams, Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();
    let start_text = Text::new("開始日を入力してください (YYYY-MM-DD)")
        .with_default(&today.format("%Y-%m-%d").to_string())
        .prompt()?;
    let start: NaiveDate = start_text.trim().parse()?;

    let period_labels: Vec<&str> = PERIOD_CHOICES.iter().map(|(label, _)| *label).collect();
    let period = Select::new("期間を選択してください", period_labels).prompt()?;
    let days = PERIOD_CHOICES
        .iter()
        .find(|(label, _)| *label == period)
        .map(|(_, days)| *days)
        .unwrap_or(30);
    let (start, end) = clamp_range(start, start + Duration::days(days));

    let selected = MultiSelect::new("イベントタイプを選択してください", CATEGORY_CHOICES.to_vec())
        .with_default(&[0])
        .prompt()?;
    let categories: Vec<String> = selected.into_iter().map(str::to_string).collect();

    let limit_text = Text::new("取得件数を入力してください (5〜100)")
        .with_default(&DEFAULT_LIMIT.to_string())
        .prompt()?;
    let limit: u32 = limit_text.trim().parse()?;
    let limit = limit.clamp(5, 100);

    Ok(QueryParams {
        start_date: start,
        end_date: end,
        category_filters: if categories.is_empty() {
            None
        } else {
            Some(categories)
        },
        result_limit: limit,
    })
}
