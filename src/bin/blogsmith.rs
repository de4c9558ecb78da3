

use blogsmith::{BlogsmithConfig, FallbackOrchestrator, PostDraft};
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct Args {
    prompt: String,
    retries: Option<u32>,
    title: Option<String>,
    json_draft: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Option<Args>> {
    let mut retries = None;
    let mut title = None;
    let mut json_draft = false;
    let mut prompt_words = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--retries" | "-r" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--retries needs a value"))?;
                retries = Some(value.parse()?);
                i += 1;
            }
            "--title" | "-t" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--title needs a value"))?;
                title = Some(value.clone());
                i += 1;
            }
            "--json-draft" => json_draft = true,
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            word => prompt_words.push(word.to_string()),
        }
        i += 1;
    }

    if prompt_words.is_empty() {
        print_help();
        anyhow::bail!("missing prompt");
    }

    Ok(Some(Args {
        prompt: prompt_words.join(" "),
        retries,
        title,
        json_draft,
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the JSON result, logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("blogsmith=info".parse()?))
        .init();

    let raw_args: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&raw_args)? else {
        return Ok(());
    };

    let config = BlogsmithConfig::from_env();
    let orchestrator = FallbackOrchestrator::from_config(&config)?;

    let result = match args.retries {
        Some(retries) => orchestrator.generate_with_retries(&args.prompt, retries).await,
        None => orchestrator.generate(&args.prompt).await,
    };

    if args.json_draft && result.success() {
        let draft = PostDraft::from_result(&result, args.title.as_deref())?;
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if !result.success() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!("blogsmith - generate a blog post with primary/secondary LLM fallback");
    println!();
    println!("USAGE:");
    println!("    blogsmith [OPTIONS] <PROMPT>...");
    println!();
    println!("OPTIONS:");
    println!("    -r, --retries <N>    Primary attempts before falling back (default: BLOGSMITH_MAX_RETRIES or 2)");
    println!("    -t, --title <TITLE>  Title for the draft (default: first '# ' heading)");
    println!("        --json-draft     Print a post draft instead of the raw generation result");
    println!("    -h, --help           Print this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    BLOGSMITH_PRIMARY_PROVIDER, BLOGSMITH_PRIMARY_MODEL, BLOGSMITH_PRIMARY_API_KEY,");
    println!("    BLOGSMITH_PRIMARY_BASE_URL, BLOGSMITH_SECONDARY_PROVIDER, BLOGSMITH_SECONDARY_MODEL,");
    println!("    BLOGSMITH_SECONDARY_API_KEY, BLOGSMITH_SECONDARY_BASE_URL, BLOGSMITH_TEMPERATURE,");
    println!("    BLOGSMITH_MAX_RETRIES, BLOGSMITH_RETRY_BASE_DELAY_MS, BLOGSMITH_TIMEOUT_SECS,");
    println!("    BLOGSMITH_SYSTEM_PROMPT, RUST_LOG");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_prompt_and_options() {
        let parsed = parse_args(&args(&["-r", "3", "--title", "Lifetimes", "--json-draft", "write", "about", "lifetimes"]))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.prompt, "write about lifetimes");
        assert_eq!(parsed.retries, Some(3));
        assert_eq!(parsed.title.as_deref(), Some("Lifetimes"));
        assert!(parsed.json_draft);
    }

    #[test]
    fn test_option_without_value_is_error() {
        let err = parse_args(&args(&["prompt", "--title"])).err().unwrap();
        assert!(err.to_string().contains("--title"));
        let err = parse_args(&args(&["prompt", "--retries"])).err().unwrap();
        assert!(err.to_string().contains("--retries"));
    }
}
