//! Use-case facade for the consuming UI layer.
//!
//! # Responsibility
//! - Wire repositories, session management, seeding and theme binding
//!   over one injected store.
//! - Keep the consumer surface narrow so presentation code never touches
//!   storage or codec details.

pub mod desk;
