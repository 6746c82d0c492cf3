//! Factory methods for inserting test rows.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let ping = factory::create_sent_ping(&db, "raid-1767261600", 3600).await?;
//!
//! let old = factory::sent_ping::SentPingFactory::new(&db)
//!     .sent_at(Utc::now() - Duration::days(30))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod sent_ping;

pub use sent_ping::create_sent_ping;
