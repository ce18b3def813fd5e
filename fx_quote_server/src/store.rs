//! Quote history persistence.
//!
//! `SqliteQuoteStore` opens its own connection for every save and closes it before
//! returning, whichever way the save ends. The table DDL runs without a deadline;
//! the insert itself is bounded by `insert_timeout`.
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use fx_quote_common::Quote;
use log::{debug, error, warn};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};

use crate::error::StoreError;
use crate::model::record::QuoteRecord;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cocatao (
    id TEXT NOT NULL,
    code TEXT NOT NULL,
    codein TEXT NOT NULL,
    name TEXT NOT NULL,
    high TEXT NOT NULL,
    low TEXT NOT NULL,
    varBid TEXT NOT NULL,
    pctChange TEXT NOT NULL,
    bid TEXT NOT NULL,
    ask TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    create_date TEXT NOT NULL
)";

const INSERT_QUOTE: &str = "INSERT INTO cocatao \
    (id, code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, create_date) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Append-only sink for fetched quotes.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Persist one quote as a new history row.
    async fn save(&self, quote: &Quote) -> Result<(), StoreError>;
}

/// Stores quotes in a file-backed SQLite database.
pub struct SqliteQuoteStore {
    options: SqliteConnectOptions,
    insert_timeout: Duration,
}

impl SqliteQuoteStore {
    /// Store backed by the file at `path`, created on first save.
    pub fn new(path: impl AsRef<Path>, insert_timeout: Duration) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self {
            options,
            insert_timeout,
        }
    }

    async fn insert(&self, conn: &mut SqliteConnection, quote: &Quote) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(StoreError::Prepare)?;

        let record = QuoteRecord::new(quote);
        let insert = sqlx::query(INSERT_QUOTE)
            .bind(&record.id)
            .bind(&record.quote.code)
            .bind(&record.quote.codein)
            .bind(&record.quote.name)
            .bind(&record.quote.high)
            .bind(&record.quote.low)
            .bind(&record.quote.var_bid)
            .bind(&record.quote.pct_change)
            .bind(&record.quote.bid)
            .bind(&record.quote.ask)
            .bind(&record.quote.timestamp)
            .bind(&record.quote.create_date)
            .execute(&mut *conn);

        tokio::time::timeout(self.insert_timeout, insert)
            .await
            .map_err(|_| StoreError::Timeout(self.insert_timeout))?
            .map_err(StoreError::Insert)?;

        debug!("Quote persisted with id {}", record.id);
        Ok(())
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn save(&self, quote: &Quote) -> Result<(), StoreError> {
        let mut conn = SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                error!("Failed to open database: {}", e);
                StoreError::Connect(e)
            })?;

        let result = self.insert(&mut conn, quote).await;
        if let Err(e) = &result {
            error!("{}", e);
        }

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e);
        }
        result
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sqlx::sqlite::SqliteJournalMode;
    use std::sync::Arc;

    pub(crate) fn quote(bid: &str) -> Quote {
        Quote {
            code: "USD".into(),
            codein: "BRL".into(),
            name: "Dólar Americano/Real Brasileiro".into(),
            high: "5.4210".into(),
            low: "5.3802".into(),
            var_bid: "-0.0120".into(),
            pct_change: "-0.22".into(),
            bid: bid.into(),
            ask: "5.3951".into(),
            timestamp: "1718049599".into(),
            create_date: "2024-06-10 16:59:59".into(),
        }
    }

    /// Rows currently in the history table as `(id, bid)` pairs.
    pub(crate) async fn rows(path: &Path) -> Vec<(String, String)> {
        let options = SqliteConnectOptions::new().filename(path);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
        let rows = sqlx::query_as::<_, (String, String)>("SELECT id, bid FROM cocatao")
            .fetch_all(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
        rows
    }

    #[tokio::test]
    async fn save_creates_table_and_inserts_row() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("history.sqlite3");
        let store = SqliteQuoteStore::new(&db, Duration::from_secs(1));

        store.save(&quote("5.3921")).await.unwrap();

        let rows = rows(&db).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, "5.3921");
    }

    #[tokio::test]
    async fn stores_every_column_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("history.sqlite3");
        let store = SqliteQuoteStore::new(&db, Duration::from_secs(1));
        let saved = quote("5.3921");

        store.save(&saved).await.unwrap();

        let options = SqliteConnectOptions::new().filename(&db);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
        let row = sqlx::query_as::<_, (String, String, String, String, String)>(
            "SELECT name, varBid, pctChange, timestamp, create_date FROM cocatao",
        )
        .fetch_one(&mut conn)
        .await
        .unwrap();

        assert_eq!(row.0, saved.name);
        assert_eq!(row.1, saved.var_bid);
        assert_eq!(row.2, saved.pct_change);
        assert_eq!(row.3, saved.timestamp);
        assert_eq!(row.4, saved.create_date);
    }

    #[tokio::test]
    async fn duplicate_quotes_accumulate_with_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("history.sqlite3");
        let store = SqliteQuoteStore::new(&db, Duration::from_secs(1));
        let same = quote("5.3921");

        store.save(&same).await.unwrap();
        store.save(&same).await.unwrap();

        let rows = rows(&db).await;
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].0, rows[1].0);
        assert_eq!(rows[0].1, rows[1].1);
    }

    #[tokio::test]
    async fn concurrent_saves_each_write_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("history.sqlite3");
        let store = Arc::new(SqliteQuoteStore::new(&db, Duration::from_secs(5)));

        // Create the file and table up front so the writers only contend on inserts.
        store.save(&quote("5.0000")).await.unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.save(&quote("5.3921")).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<String> = rows(&db).await.into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 9);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[tokio::test]
    async fn unopenable_database_is_a_connect_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("missing").join("history.sqlite3");
        let store = SqliteQuoteStore::new(&db, Duration::from_secs(1));

        let err = store.save(&quote("5.3921")).await.unwrap_err();
        assert!(matches!(err, StoreError::Connect(_)));
    }

    #[tokio::test]
    async fn blocked_insert_hits_its_deadline() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("history.sqlite3");
        SqliteQuoteStore::new(&db, Duration::from_secs(1))
            .save(&quote("5.0000"))
            .await
            .unwrap();

        // WAL lets the store read the schema while this connection holds the write lock.
        let options = SqliteConnectOptions::new()
            .filename(&db)
            .journal_mode(SqliteJournalMode::Wal);
        let mut writer = SqliteConnection::connect_with(&options).await.unwrap();
        sqlx::query("BEGIN IMMEDIATE")
            .execute(&mut writer)
            .await
            .unwrap();

        let store = SqliteQuoteStore::new(&db, Duration::from_millis(10));
        let save = tokio::spawn(async move { store.save(&quote("5.3921")).await });

        tokio::time::sleep(Duration::from_millis(200)).await;
        sqlx::query("ROLLBACK").execute(&mut writer).await.unwrap();
        writer.close().await.unwrap();

        let err = save.await.unwrap().unwrap_err();
        assert!(matches!(err, StoreError::Timeout(d) if d == Duration::from_millis(10)));
    }
}
