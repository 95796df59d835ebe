//! Default-data bootstrap.
//!
//! # Invariants
//! - The presence check is "does the key exist at all", never "is the
//!   data valid": a collection the user deliberately emptied is never
//!   re-seeded.
//! - At most one bootstrap admin is ever auto-created.
//! - Running the seeder any number of times after the first run leaves
//!   every collection byte-identical.

use crate::clock::{format_timestamp, Clock};
use crate::model::communication::{Communication, Priority};
use crate::model::correspondence::Correspondence;
use crate::model::user::{Role, User};
use crate::model::visitor::Visitor;
use crate::repo::{
    store_collection, RepoResult, COMMUNICATIONS_KEY, CORRESPONDENCES_KEY, USERS_KEY, VISITORS_KEY,
};
use crate::store::Store;
use chrono::Duration;
use log::info;

/// Seeds baseline data into every absent collection key.
pub fn seed_defaults(store: &impl Store, clock: &dyn Clock) -> RepoResult<()> {
    if store.read(USERS_KEY)?.is_none() {
        store_collection(store, USERS_KEY, &default_users())?;
        info!("event=seed module=seed status=ok key={USERS_KEY}");
    }

    if store.read(VISITORS_KEY)?.is_none() {
        store_collection(store, VISITORS_KEY, &Vec::<Visitor>::new())?;
        info!("event=seed module=seed status=ok key={VISITORS_KEY}");
    }

    if store.read(CORRESPONDENCES_KEY)?.is_none() {
        store_collection(store, CORRESPONDENCES_KEY, &Vec::<Correspondence>::new())?;
        info!("event=seed module=seed status=ok key={CORRESPONDENCES_KEY}");
    }

    if store.read(COMMUNICATIONS_KEY)?.is_none() {
        store_collection(store, COMMUNICATIONS_KEY, &default_communications(clock))?;
        info!("event=seed module=seed status=ok key={COMMUNICATIONS_KEY}");
    }

    Ok(())
}

fn default_users() -> Vec<User> {
    vec![
        User {
            id: "admin-001".to_string(),
            login: "admin".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
            name: "Administrador".to_string(),
            residence_number: None,
            email: Some("admin@condominio.com".to_string()),
            phone: None,
        },
        User {
            id: "res-001".to_string(),
            login: "apt101".to_string(),
            password: "123456".to_string(),
            role: Role::Resident,
            name: "João Silva".to_string(),
            residence_number: Some("101".to_string()),
            email: Some("joao@email.com".to_string()),
            phone: Some("(11) 99999-9999".to_string()),
        },
        User {
            id: "res-002".to_string(),
            login: "apt102".to_string(),
            password: "123456".to_string(),
            role: Role::Resident,
            name: "Maria Santos".to_string(),
            residence_number: Some("102".to_string()),
            email: Some("maria@email.com".to_string()),
            phone: Some("(11) 88888-8888".to_string()),
        },
    ]
}

fn default_communications(clock: &dyn Clock) -> Vec<Communication> {
    vec![
        Communication {
            id: "comm-001".to_string(),
            title: "Manutenção do Elevador".to_string(),
            content: "Informamos que o elevador social passará por manutenção preventiva \
                      no dia 25/01/2024 das 8h às 17h. Pedimos a compreensão de todos."
                .to_string(),
            date: clock.timestamp(),
            author: "Administração".to_string(),
            priority: Priority::High,
        },
        Communication {
            id: "comm-002".to_string(),
            title: "Nova Política de Visitantes".to_string(),
            content: "A partir do próximo mês, todos os visitantes deverão ser cadastrados \
                      no sistema antes da visita. Consulte o regulamento completo na portaria."
                .to_string(),
            date: format_timestamp(clock.now() - Duration::days(1)),
            author: "Síndico".to_string(),
            priority: Priority::Medium,
        },
    ]
}
