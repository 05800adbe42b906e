use anyhow::Result;

use crate::desk::audit;
use crate::desk::config::DeskConfig;
use crate::desk::model::User;
use crate::desk::paths::DeskPaths;
use crate::desk::store;

/// The in-memory authoritative model plus its persistence context. All
/// mutation funnels through the operation modules (`session`, `registry`,
/// `ledger`); nothing else writes these fields.
///
/// Only the signed-in *email* is held here. The snapshot a caller observes is
/// derived from the user collection on read, so it can never drift from the
/// authoritative record within one session. The durable `session.json` keeps
/// the full-record layout and is rewritten whenever a mutation touches the
/// signed-in user.
#[derive(Debug)]
pub struct Desk {
    pub paths: DeskPaths,
    pub config: DeskConfig,
    pub users: Vec<User>,
    pub signed_in: Option<String>,
}

impl Desk {
    pub fn open(paths: DeskPaths, config: DeskConfig) -> Result<Self> {
        let users = store::load_users(&paths)?;
        let signed_in = store::load_session(&paths)?.map(|user| user.email);
        Ok(Self {
            paths,
            config,
            users,
            signed_in,
        })
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    pub fn user_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.email == email)
    }

    /// Derived projection of the signed-in identity. `None` when logged out,
    /// or when the durable session names a user the collection does not hold
    /// (possible after another session rewrote the store).
    pub fn authenticated_user(&self) -> Option<&User> {
        let email = self.signed_in.as_deref()?;
        self.user(email)
    }

    /// Persist the collection after a mutation of `email`'s record, and keep
    /// the durable session snapshot in step when that user is signed in.
    pub(crate) fn persist_for(&self, email: &str) -> Result<()> {
        store::save_users(&self.paths, &self.users)?;
        if self.signed_in.as_deref() == Some(email)
            && let Some(user) = self.user(email)
        {
            store::save_session(&self.paths, user)?;
        }
        Ok(())
    }

    pub(crate) fn audit(&self, op: &str, subject: &str, detail: &str) -> Result<()> {
        if !self.config.audit_enabled {
            return Ok(());
        }
        audit::append_event(&self.paths, op, subject, detail)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::Desk;
    use crate::desk::config::DeskConfig;
    use crate::desk::paths::DeskPaths;

    pub fn test_paths(root: &std::path::Path) -> DeskPaths {
        let desk_home = root.join("desk");
        let store_dir = desk_home.join("store");
        DeskPaths {
            users_file: store_dir.join("users.json"),
            session_file: store_dir.join("session.json"),
            logs_dir: desk_home.join("logs"),
            store_dir,
            desk_home,
        }
    }

    pub fn open_desk(root: &std::path::Path) -> Desk {
        let config = DeskConfig {
            audit_enabled: false,
            ..DeskConfig::default()
        };
        Desk::open(test_paths(root), config).expect("open desk")
    }
}
