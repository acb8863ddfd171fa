use async_compression::tokio::bufread::GzipDecoder;
use async_compression::tokio::write::GzipEncoder;
use chrono::Utc;
use engine::{League, MatchResult, Squad};
use log::{debug, info};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};

const MATCH_DIRECTORY: &str = "matches";
const SQUAD_DIRECTORY: &str = "squads";
const LEAGUE_DIRECTORY: &str = "leagues";

/// Gzip JSON dumps of everything the API produces.
#[derive(Debug, Clone)]
pub struct ResultStore {
    root: PathBuf,
}

impl ResultStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ResultStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn store_match(&self, result: &MatchResult) -> io::Result<PathBuf> {
        let name = format!("{}_vs_{}", slug(&result.team1), slug(&result.team2));

        self.write(MATCH_DIRECTORY, &name, result).await
    }

    pub async fn store_squad(&self, team: &str, squad: &Squad) -> io::Result<PathBuf> {
        self.write(SQUAD_DIRECTORY, &slug(team), squad).await
    }

    pub async fn store_league(&self, league: &League) -> io::Result<PathBuf> {
        self.write(LEAGUE_DIRECTORY, &slug(&league.name), league).await
    }

    pub async fn read(&self, path: &Path) -> io::Result<serde_json::Value> {
        let file = File::open(path).await?;

        let mut decoder = GzipDecoder::new(BufReader::new(file));

        let mut data = Vec::new();
        decoder.read_to_end(&mut data).await?;

        serde_json::from_slice(&data).map_err(io::Error::other)
    }

    async fn write<T: Serialize>(&self, directory: &str, name: &str, value: &T) -> io::Result<PathBuf> {
        let out_dir = self.root.join(directory);

        tokio::fs::create_dir_all(&out_dir).await?;

        let out_file = out_dir.join(format!(
            "{}_{}.json.gz",
            name,
            Utc::now().format("%Y%m%d%H%M%S%f")
        ));

        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&out_file)
            .await?;

        let mut compressed_file = GzipEncoder::with_quality(file, async_compression::Level::Best);

        let file_data = serde_json::to_vec(value).map_err(io::Error::other)?;

        debug!("{} uncompressed size = {}", out_file.display(), file_data.len());

        compressed_file.write_all(&file_data).await?;
        compressed_file.write_all(b"\n").await?;
        compressed_file.shutdown().await?;

        info!("stored {}", out_file.display());

        Ok(out_file)
    }
}

fn slug(value: &str) -> String {
    let slug: String = value
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .to_lowercase();

    if slug.is_empty() { "unnamed".to_string() } else { slug }
}
