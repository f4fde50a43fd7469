use clap::Parser;
use method_mux::MethodSlot;
use reqwest::Method;

#[derive(Parser)]
#[command(name = "mux-probe")]
#[command(about = "Send every HTTP method to a URL and print the status codes", long_about = None)]
struct Cli {
    /// Target URL, e.g. http://localhost:9000/single
    url: String,

    /// Also send an unrecognized extension method
    #[arg(long)]
    unknown: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut methods: Vec<Method> = MethodSlot::ALL.iter().map(|slot| slot.to_method()).collect();
    if cli.unknown {
        methods.push(Method::from_bytes(b"UNKNOWN")?);
    }

    for method in methods {
        match client.request(method.clone(), &cli.url).send().await {
            Ok(res) => println!("{:<8} {}", method.as_str(), res.status().as_u16()),
            Err(e) => eprintln!("{:<8} error: {}", method.as_str(), e),
        }
    }

    Ok(())
}
