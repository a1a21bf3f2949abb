//! 用户通知
//!
//! 通知是唯一的用户反馈通道。TUI 把它们显示为阻塞式弹窗，
//! 必须逐个确认后才能继续操作。

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ProductAdded,
    ProductRemoved,
    NothingToRemove,
    NotImplemented,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::ProductAdded => "Product added successfully!",
            Notice::ProductRemoved => "Last product removed successfully!",
            Notice::NothingToRemove => "No products to remove!",
            Notice::NotImplemented => "Feature not implemented yet!",
        }
    }

    /// 是否属于提醒类（非成功）通知
    pub fn is_warning(self) -> bool {
        matches!(self, Notice::NothingToRemove | Notice::NotImplemented)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// 通知通道
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// 带时间戳的历史记录
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedNotice {
    pub notice: Notice,
    pub at: DateTime<Local>,
}

/// 弹窗队列
#[derive(Debug, Clone)]
pub struct Alerts {
    pending: VecDeque<Notice>,
    history: VecDeque<LoggedNotice>,
    history_limit: usize,
}

impl Alerts {
    pub fn new(history_limit: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            history: VecDeque::new(),
            history_limit: history_limit.max(1),
        }
    }

    /// 当前显示的弹窗
    pub fn current(&self) -> Option<Notice> {
        self.pending.front().copied()
    }

    pub fn is_blocking(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 关闭当前弹窗
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn latest(&self) -> Option<&LoggedNotice> {
        self.history.back()
    }

    pub fn history(&self) -> impl Iterator<Item = &LoggedNotice> {
        self.history.iter()
    }
}

impl Default for Alerts {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Notifier for Alerts {
    fn notify(&mut self, notice: Notice) {
        self.pending.push_back(notice);
        self.history.push_back(LoggedNotice {
            notice,
            at: Local::now(),
        });
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
