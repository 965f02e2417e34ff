#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use user_cache_service::application::services::UserService;
use user_cache_service::domain::entities::{NewUser, User};
use user_cache_service::domain::repositories::UserRepository;
use user_cache_service::error::AppError;
use user_cache_service::infrastructure::cache::{CacheError, CacheResult, CacheService};
use user_cache_service::state::AppState;

/// In-process stand-in for the `users` table.
///
/// Ids are assigned from a counter, like a `SERIAL` column.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<BTreeMap<i32, User>>,
    next_id: Mutex<i32>,
    unavailable: AtomicBool,
}

impl InMemoryUserRepository {
    /// Writes a row directly, bypassing the service and its cache.
    pub fn put(&self, user: User) {
        self.rows.lock().unwrap().insert(user.id, user);
    }

    pub fn get(&self, id: i32) -> Option<User> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Makes every subsequent call fail like an unreachable database.
    pub fn go_down(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(AppError::internal("Database error", json!({})))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.check()?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        let user = User::from_new(id, new_user);
        self.put(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, changes: NewUser) -> Result<u64, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = User::from_new(id, changes);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn health_check(&self) -> bool {
        self.check().is_ok()
    }
}

/// In-process stand-in for Redis.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
    unavailable: AtomicBool,
}

impl MemoryCache {
    /// Makes every subsequent call fail like a dropped Redis connection.
    pub fn go_down(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> CacheResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(CacheError::ConnectionError("connection refused".into()))
        } else {
            Ok(())
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.check()?;
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.check()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> CacheResult<Vec<String>> {
        self.check()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> bool {
        self.check().is_ok()
    }
}

/// Handles to the fakes behind a test [`AppState`].
pub struct TestBackends {
    pub store: Arc<InMemoryUserRepository>,
    pub cache: Arc<MemoryCache>,
}

pub fn create_test_state() -> (AppState, TestBackends) {
    let store = Arc::new(InMemoryUserRepository::default());
    let cache = Arc::new(MemoryCache::default());

    let user_service = Arc::new(UserService::new(store.clone(), cache.clone()));
    let state = AppState::new(user_service, cache.clone());

    (state, TestBackends { store, cache })
}

pub fn sample_user_json() -> serde_json::Value {
    json!({ "firstName": "Ada", "lastName": "Lovelace", "age": 36 })
}
