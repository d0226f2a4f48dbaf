use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sevamitra::connector::CACHE_FILE_NAME;
use sevamitra::{
    AnalysisParser, AnalyzeDocumentUseCase, Application, AssistantChatUseCase, ChatClient,
    ChatSession, ChatTurn, CitizenProfile, CitizenQueryUseCase, HeuristicAnalysisParser,
    JsonAnalysisParser, JsonFileTranslationCache, Language, MockChatClient, OfficerInsightsUseCase,
    OfficerProfile, OpenAiChatClient, SchemeRecommendationsUseCase, TranslateTextUseCase,
    DEFAULT_CACHE_CAPACITY,
};

#[derive(Parser)]
#[command(name = "sevamitra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.sevamitra")]
    data_dir: String,

    /// Use the scripted mock client instead of the live completion API
    #[arg(long, global = true)]
    mock: bool,

    /// Expect structured JSON analysis responses instead of prose heuristics
    #[arg(long, global = true)]
    strict_json: bool,

    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one or more texts into a target language
    Translate {
        #[arg(required = true)]
        texts: Vec<String>,

        /// Target language code (en, hi, ta, te, fr, de)
        #[arg(short, long)]
        to: String,
    },

    /// Analyze a document's extracted text
    Analyze {
        /// e.g. "Income Certificate"
        document_type: String,

        /// Path to a text file, or the text itself
        content: String,

        #[arg(short, long, default_value = "en")]
        language: String,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a question about schemes and services
    Ask {
        question: String,

        #[arg(short, long, default_value = "")]
        context: String,

        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Recommend schemes for a citizen profile
    Recommend {
        #[arg(long)]
        occupation: String,

        /// Annual income in INR
        #[arg(long)]
        income: u64,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        location: String,

        #[arg(long, default_value = "general")]
        category: String,

        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Summarize an officer's application queue
    Insights {
        /// JSON file containing the application queue
        applications: PathBuf,

        #[arg(long, default_value = "Duty Officer")]
        officer: String,

        #[arg(long, default_value = "Revenue Inspector")]
        designation: String,

        #[arg(long, default_value = "District Office")]
        district: String,

        /// Print the insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send one message to the assistant
    Chat {
        message: String,

        /// JSON file with prior turns; updated with this exchange
        #[arg(long)]
        history: Option<PathBuf>,

        #[arg(short, long, default_value = "")]
        context: String,

        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Inspect or clear the translation cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    Stats,
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data_dir = expand_tilde(&cli.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let cache = Arc::new(JsonFileTranslationCache::open(
        PathBuf::from(&data_dir).join(CACHE_FILE_NAME),
        cli.cache_capacity,
    )?);

    let client: Arc<dyn ChatClient> = if cli.mock {
        info!("Using mock chat client");
        Arc::new(MockChatClient::new())
    } else {
        Arc::new(OpenAiChatClient::from_env()?)
    };

    let parser: Arc<dyn AnalysisParser> = if cli.strict_json {
        Arc::new(JsonAnalysisParser::new())
    } else {
        Arc::new(HeuristicAnalysisParser::new())
    };

    match cli.command {
        Commands::Translate { texts, to } => {
            let language = Language::from_code(&to);
            let use_case = TranslateTextUseCase::new(client, cache);

            let translations = use_case.translate_many(&texts, language).await;
            for translation in translations {
                println!("{translation}");
            }
        }

        Commands::Analyze {
            document_type,
            content,
            language,
            json,
        } => {
            let text = read_content(&content)?;
            let use_case = AnalyzeDocumentUseCase::new(client, parser);
            let report = use_case
                .execute(&document_type, &text, Language::from_code(&language))
                .await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Model:      {}", report.model);
                println!("Risk:       {}", report.data.risk_level);
                println!("Confidence: {}", report.data.confidence);
                println!("\n{}\n", report.data.analysis);
                println!("Recommendations:");
                for rec in &report.data.recommendations {
                    println!("  - {rec}");
                }
            }
        }

        Commands::Ask {
            question,
            context,
            language,
        } => {
            let use_case = CitizenQueryUseCase::new(client);
            let answer = use_case
                .execute(&question, &context, Language::from_code(&language))
                .await;
            println!("{answer}");
        }

        Commands::Recommend {
            occupation,
            income,
            age,
            location,
            category,
            language,
        } => {
            let profile = CitizenProfile {
                occupation,
                annual_income: income,
                age,
                location,
                category,
            };
            let use_case = SchemeRecommendationsUseCase::new(client);
            let recommendations = use_case
                .execute(&profile, Language::from_code(&language))
                .await;
            println!("{recommendations}");
        }

        Commands::Insights {
            applications,
            officer,
            designation,
            district,
            json,
        } => {
            let contents = std::fs::read_to_string(&applications)?;
            let queue: Vec<Application> = serde_json::from_str(&contents)?;
            let profile = OfficerProfile {
                name: officer,
                designation,
                district,
            };

            let use_case = OfficerInsightsUseCase::new(client);
            let insights = use_case.execute(&profile, &queue).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&insights)?);
            } else {
                println!("Workload score: {}/100\n", insights.workload_score);
                println!("{}\n", insights.insights);
                println!("Priorities:");
                for priority in &insights.priorities {
                    println!("  - {priority}");
                }
                println!("\nActions:");
                for action in &insights.recommendations {
                    println!("  - {action}");
                }
            }
        }

        Commands::Chat {
            message,
            history,
            context,
            language,
        } => {
            let mut session = match history.as_deref() {
                Some(path) if path.exists() => {
                    let turns: Vec<ChatTurn> =
                        serde_json::from_str(&std::fs::read_to_string(path)?)?;
                    ChatSession::from_turns(turns)
                }
                _ => ChatSession::new(),
            };

            let use_case = AssistantChatUseCase::new(client);
            let reply = use_case
                .send(&mut session, &message, &context, Language::from_code(&language))
                .await;
            println!("{reply}");

            if let Some(path) = history {
                std::fs::write(&path, serde_json::to_string_pretty(session.turns())?)?;
            }
        }

        Commands::Cache { command } => match command {
            CacheCommands::Stats => {
                use sevamitra::TranslationCache;
                println!("Cached translations: {}", cache.len().await?);
                println!("Capacity:            {}", cli.cache_capacity);
                println!("Data dir:            {data_dir}");
            }
            CacheCommands::Clear => {
                use sevamitra::TranslationCache;
                cache.clear().await?;
                println!("Translation cache cleared.");
            }
        },
    }

    Ok(())
}

/// Treats `content` as a file path when one exists, otherwise as the
/// literal document text.
fn read_content(content: &str) -> Result<String> {
    let path = Path::new(content);
    if path.exists() {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Ok(content.to_string())
    }
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn translate_requires_target_language() {
        let res = Cli::try_parse_from(["sevamitra", "translate", "hello"]);
        assert!(res.is_err(), "--to should be required");
    }

    #[test]
    fn translate_accepts_multiple_texts() {
        let cli =
            Cli::try_parse_from(["sevamitra", "translate", "one", "two", "--to", "ta"]).unwrap();
        match cli.command {
            Commands::Translate { texts, to } => {
                assert_eq!(texts.len(), 2);
                assert_eq!(to, "ta");
            }
            _ => panic!("expected translate command"),
        }
    }

    #[test]
    fn cache_stats_parses() {
        let res = Cli::try_parse_from(["sevamitra", "cache", "stats"]);
        assert!(res.is_ok());
    }
}
