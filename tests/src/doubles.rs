use std::collections::{HashMap, VecDeque};
use std::io;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pingr_core::Reachability;
use tokio::time::sleep;

/// How an address answers one attempt.
#[derive(Clone, Copy, Debug)]
pub enum Behavior {
    /// Answers after the given delay.
    Reply(Duration),
    /// Never answers; the attempt lasts the whole timeout.
    Silent,
    /// The check itself fails.
    Fail(io::ErrorKind),
}

pub fn reply_ms(ms: u64) -> Behavior {
    Behavior::Reply(Duration::from_millis(ms))
}

/// Addresses passed to `is_reachable`, in call order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<IpAddr>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<IpAddr> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, addr: IpAddr) {
        self.0.lock().unwrap().push(addr);
    }
}

/// Deterministic stand-in for the network.
///
/// IP literals always resolve; names resolve only when registered. Each
/// address plays its script, then falls back to the default behavior.
pub struct ScriptedReachability {
    names: HashMap<String, IpAddr>,
    scripts: Mutex<HashMap<IpAddr, VecDeque<Behavior>>>,
    default: Behavior,
    log: CallLog,
}

impl ScriptedReachability {
    pub fn new(default: Behavior) -> Self {
        Self {
            names: HashMap::new(),
            scripts: Mutex::new(HashMap::new()),
            default,
            log: CallLog::default(),
        }
    }

    pub fn with_name(mut self, name: &str, addr: &str) -> Self {
        self.names.insert(name.to_string(), addr.parse().unwrap());
        self
    }

    pub fn with_script(self, addr: &str, script: &[Behavior]) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(addr.parse().unwrap(), script.iter().copied().collect());
        self
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    fn next_behavior(&self, addr: IpAddr) -> Behavior {
        self.scripts
            .lock()
            .unwrap()
            .get_mut(&addr)
            .and_then(VecDeque::pop_front)
            .unwrap_or(self.default)
    }
}

#[async_trait]
impl Reachability for ScriptedReachability {
    async fn resolve(&self, host: &str) -> io::Result<IpAddr> {
        if let Ok(addr) = host.parse::<IpAddr>() {
            return Ok(addr);
        }
        self.names
            .get(host)
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("unknown host {host}")))
    }

    async fn is_reachable(&self, addr: IpAddr, timeout: Duration) -> io::Result<bool> {
        self.log.push(addr);
        match self.next_behavior(addr) {
            Behavior::Reply(delay) if delay <= timeout => {
                sleep(delay).await;
                Ok(true)
            }
            Behavior::Reply(_) | Behavior::Silent => {
                sleep(timeout).await;
                Ok(false)
            }
            Behavior::Fail(kind) => Err(io::Error::from(kind)),
        }
    }
}
