use clap::Parser;
use tracing_subscriber::EnvFilter;

use repairclass::taxonomy::sample_requests_for;
use repairclass::{
    BackendConfig, ClassificationReport, ClassificationRequest, Classifier, Config, RetryPolicy,
    Taxonomy,
};

#[derive(Parser, Debug)]
#[command(name = "repairclass")]
#[command(version = "0.1.0")]
#[command(about = "Classify auto repair requests into service categories")]
struct Args {
    /// Problem description to classify
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Vehicle make attached to the request
    #[arg(short, long)]
    make: Option<String>,

    /// File with one request per line (batch mode)
    #[arg(short, long)]
    input: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Print the category taxonomy and exit
    #[arg(long)]
    list_categories: bool,

    /// OpenAI API key (overrides OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Model identifier (overrides OPENAI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Backend request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Retries for transient backend failures
    #[arg(long)]
    retries: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("repairclass=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let taxonomy = Taxonomy::repair();

    if args.list_categories {
        emit(&format_taxonomy(&taxonomy), &args)?;
        return Ok(());
    }

    let requests = collect_requests(&args)?;

    let mut config = match &args.api_key {
        Some(key) => Config::from_env_with_key(key.clone())?,
        None => Config::from_env()?,
    };
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(timeout) = args.timeout_secs {
        config.request_timeout_secs = timeout;
    }
    if let Some(retries) = args.retries {
        config.max_retries = retries;
    }
    config.validate()?;
    tracing::info!(
        "Using model {} (timeout {}s, {} retries)",
        config.model,
        config.request_timeout_secs,
        config.max_retries
    );

    let classifier = Classifier::from_config(taxonomy, &BackendConfig::from(&config))?;
    let policy = RetryPolicy::new(config.max_retries);

    let reports = match <[ClassificationRequest; 1]>::try_from(requests) {
        Ok([request]) => {
            let outcome = classifier.classify_with_retry(&request, &policy).await;
            vec![ClassificationReport::new(request, &outcome)]
        }
        Err(requests) => {
            classifier
                .classify_batch(requests, config.concurrency_limit, &policy)
                .await
        }
    };

    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&reports)?,
        "markdown" => format_markdown(&reports),
        _ => format_text(&reports),
    };
    emit(&output, &args)?;

    Ok(())
}

fn collect_requests(args: &Args) -> anyhow::Result<Vec<ClassificationRequest>> {
    let texts: Vec<String> = match (&args.text, &args.input) {
        (Some(text), _) => vec![text.clone()],
        (None, Some(path)) => std::fs::read_to_string(path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        (None, None) => anyhow::bail!("either --text or --input is required"),
    };

    if texts.is_empty() {
        anyhow::bail!("no requests to classify");
    }

    Ok(texts
        .into_iter()
        .map(|text| {
            let request = ClassificationRequest::new(text);
            match &args.make {
                Some(make) => request.with_vehicle_make(make.as_str()),
                None => request,
            }
        })
        .collect())
}

fn emit(output: &str, args: &Args) -> anyhow::Result<()> {
    if let Some(ref path) = args.output {
        std::fs::write(path, output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn vehicle(report: &ClassificationReport) -> &str {
    report.request.vehicle_make.as_deref().unwrap_or("не указана")
}

fn format_text(reports: &[ClassificationReport]) -> String {
    let mut output = String::new();

    for report in reports {
        output.push_str("\n=== Заявка на ремонт ===\n\n");
        output.push_str(&format!("Автомобиль: {}\n", vehicle(report)));
        output.push_str(&format!("Описание проблемы: {}\n\n", report.request.text));

        if let Some(kind) = report.failure {
            output.push_str(&format!("Ошибка классификации: {}\n", kind));
        }
        output.push_str(&format!("Категория ремонта: {}\n", report.category));
        output.push_str(&format!("Уверенность: {:.1}%\n", report.confidence * 100.0));
        output.push_str(&format!("Объяснение: {}\n", report.explanation));
    }

    output
}

fn format_markdown(reports: &[ClassificationReport]) -> String {
    let mut output = String::new();

    output.push_str("# Классификация заявок на ремонт\n\n");
    output.push_str("| Автомобиль | Описание проблемы | Категория | Уверенность | Объяснение |\n");
    output.push_str("|------------|-------------------|-----------|-------------|------------|\n");

    for report in reports {
        let category = match report.failure {
            Some(kind) => format!("{} ({})", report.category, kind),
            None => report.category.clone(),
        };
        output.push_str(&format!(
            "| {} | {} | {} | {:.1}% | {} |\n",
            escape_cell(vehicle(report)),
            escape_cell(&report.request.text),
            escape_cell(&category),
            report.confidence * 100.0,
            escape_cell(&report.explanation)
        ));
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    output.push_str(&format!(
        "\n---\n*Заявок: {}, не классифицировано: {}*\n",
        reports.len(),
        failed
    ));

    output
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn format_taxonomy(taxonomy: &Taxonomy) -> String {
    let mut output = String::new();

    output.push_str(&format!("Категории ремонта ({}):\n", taxonomy.len()));
    for category in taxonomy.categories() {
        output.push_str(&format!("\n- {}\n", category.name));
        output.push_str(&format!("  Ключевые слова: {}\n", category.hints.join(", ")));
        for sample in sample_requests_for(&category.name) {
            output.push_str(&format!("  Пример: \"{}\"\n", sample));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use repairclass::{ClassificationFailure, FailureKind, Outcome};

    #[test]
    fn test_markdown_escapes_every_cell() {
        let request = ClassificationRequest::new("Стук | скрип\nв подвеске").with_vehicle_make("Lada|Niva");
        let outcome: Outcome = Err(ClassificationFailure::new(
            FailureKind::MalformedResponse,
            "ответ | не JSON",
        ));
        let markdown = format_markdown(&[ClassificationReport::new(request, &outcome)]);

        let row = markdown
            .lines()
            .find(|line| line.contains("Lada"))
            .unwrap();
        assert!(row.contains("Lada\\|Niva"));
        assert!(row.contains("Стук \\| скрип в подвеске"));
        assert!(row.contains("ответ \\| не JSON"));
        // Six unescaped separators delimit five columns.
        assert_eq!(row.replace("\\|", "").matches('|').count(), 6);
    }
}
