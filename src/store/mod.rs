//! Remote backed left and right working sets of trips.
//!
//! Loads fetch both sets together and either both land or neither does.
//! Updates are optimistic: the new list is applied in memory straight away
//! and the whole list is written back in a detached task.

mod extract;
mod models;
pub use models::*;

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed with status {0}")]
    RequestFailed(StatusCode),
    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse schedule data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Persist task did not finish: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub struct Config {
    pub left_url: String,
    pub right_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_url: "http://127.0.0.1:3000/api/schedule-tool".into(),
            right_url: "http://127.0.0.1:3000/api/schedule-tool-right".into(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn url(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_url,
            Side::Right => &self.right_url,
        }
    }
}

/// Outcome of a background write. Dropping it leaves the write running.
#[derive(Debug)]
pub struct PersistHandle(JoinHandle<Result<(), Error>>);

impl PersistHandle {
    pub async fn wait(self) -> Result<(), Error> {
        self.0.await?
    }
}

#[derive(Serialize)]
struct TripsBody<'a> {
    trips: &'a [Trip],
}

pub struct ScheduleStore {
    client: Client,
    config: Config,
    left: Vec<Trip>,
    right: Vec<Trip>,
}

impl ScheduleStore {
    pub fn new(config: self::Config) -> Result<Self, self::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            left: Vec::new(),
            right: Vec::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn left(&self) -> &[Trip] {
        &self.left
    }

    pub fn right(&self) -> &[Trip] {
        &self.right
    }

    pub fn trips(&self, side: Side) -> &[Trip] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn trips_mut(&mut self, side: Side) -> &mut Vec<Trip> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Fetches both working sets concurrently. On any failure both sets keep
    /// their previous contents.
    pub async fn load(&mut self) -> Result<(), self::Error> {
        let (left, right) = self.fetcher().fetch().await?;
        self.replace(left, right);
        Ok(())
    }

    /// A detached handle for fetching both sets without borrowing the store.
    pub fn fetcher(&self) -> Fetcher {
        Fetcher {
            client: self.client.clone(),
            left_url: self.config.left_url.clone(),
            right_url: self.config.right_url.clone(),
        }
    }

    /// Swaps in freshly fetched working sets.
    pub fn replace(&mut self, left: Vec<Trip>, right: Vec<Trip>) {
        self.left = left;
        self.right = right;
    }

    pub fn update_left<F>(&mut self, f: F) -> PersistHandle
    where
        F: FnOnce(&[Trip]) -> Vec<Trip>,
    {
        self.update(Side::Left, f)
    }

    pub fn update_right<F>(&mut self, f: F) -> PersistHandle
    where
        F: FnOnce(&[Trip]) -> Vec<Trip>,
    {
        self.update(Side::Right, f)
    }

    /// Applies `f` to the in-memory list and writes the resulting list back.
    ///
    /// Must be called from within a Tokio runtime. The in-memory list is never
    /// rolled back when the write fails.
    pub fn update<F>(&mut self, side: Side, f: F) -> PersistHandle
    where
        F: FnOnce(&[Trip]) -> Vec<Trip>,
    {
        let next = f(self.trips(side));
        let trips = next.clone();
        *self.trips_mut(side) = next;

        let client = self.client.clone();
        let url = self.config.url(side).to_string();
        PersistHandle(tokio::spawn(async move {
            let result = save_trips(&client, &url, &trips).await;
            if let Err(err) = &result {
                warn!("Failed to persist {side} trips: {err}");
            }
            result
        }))
    }
}

/// Fetches both working sets, see [`ScheduleStore::fetcher`].
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    left_url: String,
    right_url: String,
}

impl Fetcher {
    pub async fn fetch(&self) -> Result<(Vec<Trip>, Vec<Trip>), self::Error> {
        let now = Instant::now();
        let (left, right) = tokio::try_join!(
            fetch_trips(&self.client, &self.left_url),
            fetch_trips(&self.client, &self.right_url),
        )?;
        debug!(
            "Fetched {} left and {} right trips in {:?}",
            left.len(),
            right.len(),
            now.elapsed()
        );
        Ok((left, right))
    }
}

async fn fetch_trips(client: &Client, url: &str) -> Result<Vec<Trip>, self::Error> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::RequestFailed(status));
    }
    let body = response.text().await?;
    let trips = extract::trips(serde_json::from_str(&body)?)?;
    Ok(trips)
}

async fn save_trips(client: &Client, url: &str, trips: &[Trip]) -> Result<(), self::Error> {
    let response = client.post(url).json(&TripsBody { trips }).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::RequestFailed(status));
    }
    Ok(())
}
