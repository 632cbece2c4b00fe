//! # Singleton Module
//!
//! Hai cách tạo instance duy nhất cho toàn process:
//! - `Singleton`: khởi tạo lười với `once_cell::sync::OnceCell`, trả về `&'static`
//! - `Journal`: `lazy_static!` + `Mutex` cho trạng thái có thể ghi

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

static INSTANCE: OnceCell<Singleton> = OnceCell::new();

/// Instance duy nhất, không có constructor public.
#[derive(Debug)]
pub struct Singleton {
    id: Uuid,
    created_at: DateTime<Utc>,
    calls: AtomicU64,
}

impl Singleton {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            calls: AtomicU64::new(0),
        }
    }

    /// Lấy instance dùng chung, tạo ở lần gọi đầu tiên.
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            let instance = Singleton::new();
            tracing::info!(id = %instance.id, "Singleton initialized");
            instance
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn do_something(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        "Singleton method was called".to_string()
    }

    /// Số lần `do_something` đã được gọi trên toàn process
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

lazy_static! {
    static ref JOURNAL: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

/// Nhật ký dùng chung cho toàn process (append-only).
pub struct Journal;

impl Journal {
    fn lock() -> MutexGuard<'static, Vec<String>> {
        // Poisoned lock vẫn giữ dữ liệu hợp lệ vì chỉ có thao tác push
        JOURNAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(entry: &str) {
        Self::lock().push(entry.to_string());
    }

    pub fn entries() -> Vec<String> {
        Self::lock().clone()
    }

    pub fn len() -> usize {
        Self::lock().len()
    }

    pub fn is_empty() -> bool {
        Self::lock().is_empty()
    }
}
