use std::{
    collections::HashMap,
    env,
    ffi::OsString,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Serializes tests that touch process environment variables. Every change
/// made through the guard is rolled back when it is dropped.
pub(crate) static ENV: EnvMutex = EnvMutex::new();

#[derive(Debug)]
pub(crate) struct EnvMutex(Mutex<()>);

impl EnvMutex {
    const fn new() -> Self {
        Self(Mutex::new(()))
    }

    pub fn lock(&self) -> EnvGuard<'_> {
        EnvGuard {
            _inner: self.0.lock().unwrap_or_else(PoisonError::into_inner),
            previous: HashMap::new(),
        }
    }
}

#[must_use = "Environment is restored when the guard is dropped"]
#[derive(Debug)]
pub(crate) struct EnvGuard<'a> {
    _inner: MutexGuard<'a, ()>,
    previous: HashMap<OsString, Option<OsString>>,
}

impl EnvGuard<'_> {
    pub fn set(&mut self, name: &str, value: &str) {
        self.remember(name);
        env::set_var(name, value);
    }

    pub fn remove(&mut self, name: &str) {
        self.remember(name);
        env::remove_var(name);
    }

    fn remember(&mut self, name: &str) {
        self.previous
            .entry(name.into())
            .or_insert_with(|| env::var_os(name));
    }
}

impl Drop for EnvGuard<'_> {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain() {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}

#[test]
fn guard_restores_environment() {
    const NAME: &str = "TOKENKIT_ENV_GUARD_TEST";
    {
        let mut guard = ENV.lock();
        guard.set(NAME, "first");
        guard.set(NAME, "second");
        assert_eq!(env::var(NAME).as_deref(), Ok("second"));
    }
    let _guard = ENV.lock();
    assert!(env::var_os(NAME).is_none());
}
