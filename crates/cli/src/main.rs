use clap::{Parser, Subcommand};
use nlq_annotate::{Annotator, LexiconAnnotator};
use nlq_core::{resolve_lexicon, CoreConfig, PatientQuery, QueryProcessor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nlq")]
#[command(about = "Natural-language patient query interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a query and print the simulated FHIR request
    Query {
        /// Free-text query, e.g. "diabetic patients over 50"
        text: String,
        /// Replace the builtin condition lexicon with a YAML document
        #[arg(long)]
        lexicon: Option<PathBuf>,
        /// Also print the detected intent
        #[arg(long)]
        explain: bool,
    },
    /// Run the worked example queries
    Demo,
    /// Print the annotated token stream for a query
    Annotate {
        /// Free-text query to annotate
        text: String,
    },
}

const DEMO_QUERIES: &[&str] = &[
    "Show me all diabetic patients over 50",
    "please give me information on youth patients who have cancer",
    "List all children with asthma",
    "Find elderly patients with heart disease",
    "Get patients under 30 with depression",
    "Show me cancer patients between 40 and 60 years old",
    "Find adults with high blood pressure",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Query {
            text,
            lexicon,
            explain,
        }) => {
            let override_yaml = match lexicon {
                Some(path) => Some(std::fs::read_to_string(path)?),
                None => None,
            };
            let lexicon = resolve_lexicon(override_yaml.as_deref())?;
            let annotator = LexiconAnnotator::new()?;
            let processor = QueryProcessor::new(CoreConfig::new(lexicon), Box::new(annotator));

            let result = processor.process(&text);
            if explain {
                println!("Intent: {}", processor.intent(&text));
            }
            println!("{}", PatientQuery::render(&result)?);
        }
        Some(Commands::Demo) => {
            let processor = QueryProcessor::with_defaults()?;
            println!("=== Natural-language patient query demo ===\n");
            for (index, query) in DEMO_QUERIES.iter().enumerate() {
                let result = processor.process(query);
                println!("Example {}:", index + 1);
                println!("Input: {}", query);
                println!("Intent: {}", processor.intent(query));
                println!("Output: {}", PatientQuery::render(&result)?);
                println!("{}", "-".repeat(50));
            }
        }
        Some(Commands::Annotate { text }) => {
            let annotator = LexiconAnnotator::new()?;
            for token in annotator.annotate(&text) {
                println!("{}", serde_json::to_string(&token)?);
            }
        }
        None => {
            println!("Use 'nlq --help' for commands");
        }
    }

    Ok(())
}
