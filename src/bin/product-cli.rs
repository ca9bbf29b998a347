use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{Map, Number, Value};

#[derive(Parser)]
#[command(name = "product-cli")]
#[command(about = "Command-line client for the product API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered
    List(ListArgs),
    /// Show one product
    Get { id: String },
    /// Create a product
    Add(AddArgs),
    /// Change some fields of a product
    Update {
        id: String,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete a product
    Delete { id: String },
}

#[derive(Args, Serialize)]
struct ListArgs {
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Args, Serialize)]
struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    price: Number,
    #[arg(long)]
    thumbnail: String,
    #[arg(long)]
    code: String,
    #[arg(long)]
    stock: u64,
}

#[derive(Args)]
struct UpdateArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    price: Option<Number>,
    #[arg(long)]
    thumbnail: Option<String>,
    #[arg(long)]
    code: Option<String>,
    #[arg(long)]
    stock: Option<u64>,
}

impl UpdateArgs {
    /// Only the flags that were given end up in the body.
    fn into_body(self) -> Value {
        let mut body = Map::new();
        if let Some(v) = self.title {
            body.insert("title".into(), v.into());
        }
        if let Some(v) = self.description {
            body.insert("description".into(), v.into());
        }
        if let Some(v) = self.price {
            body.insert("price".into(), v.into());
        }
        if let Some(v) = self.thumbnail {
            body.insert("thumbnail".into(), v.into());
        }
        if let Some(v) = self.code {
            body.insert("code".into(), v.into());
        }
        if let Some(v) = self.stock {
            body.insert("stock".into(), v.into());
        }
        Value::Object(body)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let products = format!("{}/products", cli.url.trim_end_matches('/'));

    let res = match cli.command {
        Commands::List(args) => client.get(&products).query(&args).send().await?,
        Commands::Get { id } => client.get(format!("{products}/{id}")).send().await?,
        Commands::Add(args) => client.post(&products).json(&args).send().await?,
        Commands::Update { id, fields } => {
            client
                .put(format!("{products}/{id}"))
                .json(&fields.into_body())
                .send()
                .await?
        }
        Commands::Delete { id } => client.delete(format!("{products}/{id}")).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let body = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", body);
    } else {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", body);
    }
    Ok(())
}
