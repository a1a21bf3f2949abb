//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 三个按钮
    AddProduct,        // 绿色按钮
    RemoveLastProduct, // 红色按钮
    OpenLink,          // 未实现的链接

    // 弹窗
    Dismiss,
}
