use clap::{Args, Parser, Subcommand};
use serde_json::{to_value, Value};

use vector_service::vector::{Vector2D, VectorList, VectorPair};

#[derive(Parser)]
#[command(name = "vector-cli")]
#[command(about = "Command-line client for the vector service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service liveness
    Health,
    /// Sum of A and B
    Sum(PairArgs),
    /// Sum of any number of vectors, e.g. `--vector 1,2 --vector -3,0.5`
    SumList {
        #[arg(long = "vector", value_parser = parse_vector, allow_hyphen_values = true)]
        vectors: Vec<Vector2D>,
    },
    /// Dot product of A and B
    Dot(PairArgs),
    /// Magnitudes of A and B
    Magnitude(PairArgs),
    /// Angle between A and B in degrees
    Angle(PairArgs),
}

#[derive(Args)]
struct PairArgs {
    #[arg(long, allow_negative_numbers = true)]
    ax: f64,
    #[arg(long, allow_negative_numbers = true)]
    ay: f64,
    #[arg(long, allow_negative_numbers = true)]
    bx: f64,
    #[arg(long, allow_negative_numbers = true)]
    by: f64,
}

impl From<PairArgs> for VectorPair {
    fn from(args: PairArgs) -> Self {
        VectorPair {
            ax: args.ax,
            ay: args.ay,
            bx: args.bx,
            by: args.by,
        }
    }
}

fn parse_vector(raw: &str) -> Result<Vector2D, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{raw}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid component `{part}`: {e}"))
    };
    Ok(Vector2D::new(parse(x)?, parse(y)?))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let (path, body) = match cli.command {
        Commands::Health => {
            let res = client.get(format!("{base}/health")).send().await?;
            return print_response(res).await;
        }
        Commands::Sum(pair) => ("suma_vectores", to_value(VectorPair::from(pair))?),
        Commands::SumList { vectors } => ("suma_lista", to_value(VectorList { vectors })?),
        Commands::Dot(pair) => ("producto_punto", to_value(VectorPair::from(pair))?),
        Commands::Magnitude(pair) => ("magnitud_vectores", to_value(VectorPair::from(pair))?),
        Commands::Angle(pair) => ("angulo_vectores", to_value(VectorPair::from(pair))?),
    };

    let res = client
        .post(format!("{base}/api/{path}"))
        .json(&body)
        .send()
        .await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("1,2").unwrap(), Vector2D::new(1.0, 2.0));
        assert_eq!(parse_vector(" -3.5 , 0 ").unwrap(), Vector2D::new(-3.5, 0.0));
        assert!(parse_vector("1").is_err());
        assert!(parse_vector("a,2").is_err());
    }

    #[test]
    fn test_cli_parses_negative_components() {
        let cli = Cli::try_parse_from([
            "vector-cli", "angle", "--ax", "-1", "--ay", "0", "--bx", "1", "--by", "-2.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Angle(pair) => {
                let pair = VectorPair::from(pair);
                assert_eq!(pair.ax, -1.0);
                assert_eq!(pair.by, -2.5);
            }
            _ => panic!("expected angle subcommand"),
        }
    }
}
