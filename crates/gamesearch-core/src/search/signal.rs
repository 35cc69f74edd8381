//! 探索中断シグナル（SearchSignal)
//!
//! 監督スレッドが任意のタイミングで `request_stop` を呼び、ワーカーの
//! 再帰が各ノードでポーリングして協調的に巻き戻る。フラグ観測後は
//! 追加の評価もリスナー通知も行われない。
//!
//! Release/Acquire ペアで書き込み側（GUI/監督スレッド）と読み出し側
//! （ワーカー）の可視性を保証する。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 中断シグナルハンドル
///
/// クローンは同じフラグを共有する。探索器はフラグを勝手にクリアしない。
/// 中断後に再探索する場合は、呼び出し側が `reset` してから次の
/// `find_move` を開始する。
#[derive(Debug, Clone, Default)]
pub struct SearchSignal {
    stop: Arc<AtomicBool>,
}

impl SearchSignal {
    /// 新しいシグナルを生成する
    pub fn new() -> Self {
        SearchSignal::default()
    }

    /// 停止を要求する（任意のスレッドから呼べる）
    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// 停止が要求されているか（ノードごとに安価に読める）
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// フラグをクリアして次の探索に備える
    #[inline]
    pub fn reset(&self) {
        self.stop.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_roundtrip() {
        let signal = SearchSignal::new();
        assert!(!signal.is_stopped());

        signal.request_stop();
        assert!(signal.is_stopped());

        signal.reset();
        assert!(!signal.is_stopped());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let signal = SearchSignal::new();
        let clone = signal.clone();
        clone.request_stop();
        assert!(signal.is_stopped());
    }

    #[test]
    fn test_cross_thread_visibility() {
        let signal = SearchSignal::new();
        let remote = signal.clone();
        let handle = std::thread::spawn(move || remote.request_stop());
        handle.join().unwrap();
        assert!(signal.is_stopped());
    }
}
