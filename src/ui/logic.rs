//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑

use super::actions::Action;
use super::state::App;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::AddProduct => {
                self.inventory.add_product();
                // 选中新追加的商品
                self.selected_index = self.cards().len().saturating_sub(1);
            }
            Action::RemoveLastProduct => {
                self.inventory.remove_last();
                self.clamp_selection();
            }
            Action::OpenLink => self.inventory.not_implemented(),

            Action::Dismiss => {
                self.inventory.notifier_mut().dismiss();
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.cards().len() {
            self.selected_index += 1;
        }
    }
}
