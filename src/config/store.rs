use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use ini::Ini;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

use super::account::IdpAccount;
use super::account_name::check_account_name;
use super::fields::AccountField;
use super::ini_writer::render_document;
use super::paths::{resolve_config_path, sibling_path};

const LOAD_CONTEXT: &str = "unable to load configuration file";
const SAVE_CONTEXT: &str = "unable to save configuration file";
const LOCK_CONTEXT: &str = "unable to lock configuration file";

/// Reads and writes named IDP accounts, one INI section per account.
///
/// A missing file is an empty configuration. Every save rewrites the whole
/// file; without [`ConfigManager::with_locking`] concurrent writers race and
/// the last one wins.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
    locking: bool,
}

impl ConfigManager {
    /// Binds to `config_file`, or `~/.saml2aws` when empty. The file is not touched.
    pub fn open(config_file: &str) -> AppResult<Self> {
        let path = resolve_config_path(config_file)?;
        debug!(path = %path.display(), "using configuration file");

        Ok(Self {
            path,
            locking: false,
        })
    }

    /// Holds an exclusive advisory lock on `<path>.lock` while saving.
    pub fn with_locking(mut self, enabled: bool) -> Self {
        self.locking = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save_account(&self, name: &str, account: &IdpAccount) -> AppResult<()> {
        account.validate()?;
        check_account_name(name)?;

        let _guard = self.lock()?;
        let mut document = self.read_document()?;

        let mut section = document.with_section(Some(name));
        for field in AccountField::ALL {
            section.set(field.key(), account.field_value(field));
        }

        self.write_document(&document)?;
        info!(account = name, path = %self.path.display(), "saved idp account");

        Ok(())
    }

    /// Loads `name`, returning a defaulted account when the section is absent.
    pub fn load_account(&self, name: &str) -> AppResult<IdpAccount> {
        let document = self.read_document()?;
        read_account(&document, name)
    }

    /// Like [`load_account`](Self::load_account), but an account equal to the
    /// defaults is reported as [`AppError::AccountNotFound`].
    pub fn load_verify_account(&self, name: &str) -> AppResult<IdpAccount> {
        let account = self.load_account(name)?;

        if account == IdpAccount::new() {
            return Err(AppError::AccountNotFound);
        }

        Ok(account)
    }

    pub fn list_accounts(&self) -> AppResult<Vec<String>> {
        let document = self.read_document()?;

        let mut names: Vec<String> = Vec::new();
        for name in document.sections().flatten() {
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    fn read_document(&self) -> AppResult<Ini> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "configuration file missing, using empty document");
            return Ok(Ini::new());
        }

        Ini::load_from_file(&self.path).map_err(|err| {
            let source = match err {
                ini::Error::Io(err) => err,
                ini::Error::Parse(err) => io::Error::new(io::ErrorKind::InvalidData, err),
            };
            AppError::io(LOAD_CONTEXT)(source)
        })
    }

    fn write_document(&self, document: &Ini) -> AppResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(AppError::io(SAVE_CONTEXT))?;

        let mut temp = temp_file_in(parent).map_err(AppError::io(SAVE_CONTEXT))?;
        temp.write_all(render_document(document).as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(AppError::io(SAVE_CONTEXT))?;

        temp.persist(&self.path)
            .map_err(|err| AppError::io(SAVE_CONTEXT)(err.error))?;

        Ok(())
    }

    fn lock(&self) -> AppResult<Option<File>> {
        if !self.locking {
            return Ok(None);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(AppError::io(LOCK_CONTEXT))?;
        }

        let lock_path = sibling_path(&self.path, ".lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(AppError::io(LOCK_CONTEXT))?;

        file.lock_exclusive().map_err(AppError::io(LOCK_CONTEXT))?;
        debug!(path = %lock_path.display(), "acquired configuration lock");

        Ok(Some(file))
    }
}

fn read_account(document: &Ini, name: &str) -> AppResult<IdpAccount> {
    let mut account = IdpAccount::new();

    let Some(section) = document.section(Some(name)) else {
        debug!(account = name, "idp account section missing, using defaults");
        return Ok(account);
    };

    for (key, value) in section.iter() {
        if let Some(field) = AccountField::from_key(key) {
            account.set_field(field, value)?;
        }
    }

    Ok(account)
}

fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".saml2aws").suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        builder.permissions(fs::Permissions::from_mode(0o600));
    }

    builder.tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn manager(dir: &TempDir) -> ConfigManager {
        let path = dir.path().join("saml2aws");
        ConfigManager::open(path.to_str().expect("utf8 temp path")).expect("open should work")
    }

    fn account() -> IdpAccount {
        IdpAccount {
            url: "https://x.example/sso".to_string(),
            provider: "Ping".to_string(),
            mfa: "Auto".to_string(),
            ..IdpAccount::new()
        }
    }

    #[test]
    fn open_does_not_create_file() {
        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir);
        assert!(!manager.path().exists());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let loaded = manager(&dir).load_account("work").expect("load should work");
        assert_eq!(loaded, IdpAccount::new());
    }

    #[test]
    fn writes_every_field_key() {
        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir);
        manager.save_account("work", &account()).expect("save should work");

        let document = Ini::load_from_file(manager.path()).expect("saved file parses");
        let section = document.section(Some("work")).expect("section written");
        for field in AccountField::ALL {
            assert!(section.contains_key(field.key()), "missing {}", field.key());
        }
        assert_eq!(section.get("aws_profile"), Some("saml"));
        assert_eq!(section.get("skip_verify"), Some("false"));
    }

    #[test]
    fn save_keeps_unknown_keys_and_other_sections() {
        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir);
        fs::write(
            manager.path(),
            "[work]\nregion = us-east-1\nurl = https://old.example\n\n[home]\nurl = https://home.example\n",
        )
        .expect("seed file");

        manager.save_account("work", &account()).expect("save should work");

        let document = Ini::load_from_file(manager.path()).expect("saved file parses");
        let work = document.section(Some("work")).expect("work section");
        assert_eq!(work.get("region"), Some("us-east-1"));
        assert_eq!(work.get("url"), Some("https://x.example/sso"));
        assert_eq!(
            document.section(Some("home")).and_then(|s| s.get("url")),
            Some("https://home.example")
        );
    }

    #[test]
    fn locked_save_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir).with_locking(true);
        manager.save_account("work", &account()).expect("save should work");

        assert_eq!(manager.load_account("work").expect("load"), account());
        assert!(sibling_path(manager.path(), ".lock").exists());
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir);
        manager.save_account("work", &account()).expect("first save");
        manager.save_account("work", &account()).expect("second save");

        let entries: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .collect();
        assert_eq!(entries, ["saml2aws"]);
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir);
        manager.save_account("work", &account()).expect("save should work");

        let mode = fs::metadata(manager.path()).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn save_into_unwritable_parent_is_io_error() {
        let dir = TempDir::new().expect("temp dir");
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").expect("seed file");

        let manager = ConfigManager::open(
            blocker.join("saml2aws").to_str().expect("utf8 temp path"),
        )
        .expect("open should work");

        match manager.save_account("work", &account()) {
            Err(AppError::Io { context, .. }) => assert_eq!(context, SAVE_CONTEXT),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_file_is_io_error() {
        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir);
        fs::write(manager.path(), "[unterminated").expect("seed file");

        match manager.load_account("work") {
            Err(AppError::Io { context, source }) => {
                assert_eq!(context, LOAD_CONTEXT);
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn lists_sections_in_file_order() {
        let dir = TempDir::new().expect("temp dir");
        let manager = manager(&dir);
        assert!(manager.list_accounts().expect("empty list").is_empty());

        manager.save_account("work", &account()).expect("save work");
        manager.save_account("home", &account()).expect("save home");
        manager.save_account("work", &account()).expect("save work again");

        assert_eq!(manager.list_accounts().expect("list"), ["work", "home"]);
    }
}
