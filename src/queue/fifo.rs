//! FIFO 队列
//!
//! 元素按入队顺序出队。

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoQueue<T> {
    q: VecDeque<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self { q: VecDeque::new() }
    }

    /// 入队：追加到队尾
    pub fn enqueue(&mut self, item: T) {
        self.q.push_back(item);
    }

    /// 出队：取出队首元素；队列为空时返回 None
    pub fn dequeue(&mut self) -> Option<T> {
        self.q.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    pub fn size(&self) -> usize {
        self.q.len()
    }

    /// 按出队顺序遍历，不消费队列
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.q.iter()
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            q: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.q.extend(iter);
    }
}

impl<T> IntoIterator for FifoQueue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    /// 按出队顺序消费队列
    fn into_iter(self) -> Self::IntoIter {
        self.q.into_iter()
    }
}
