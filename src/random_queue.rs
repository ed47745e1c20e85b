use crate::iterators::RandomIter;
use crate::shuffle::fisher_yates;
use std::fmt;
use std::iter::FromIterator;

/// A queue whose removals and samples pick a uniformly random item.
///
/// Items occupy the prefix of a resizable slot vector. The prefix is
/// reshuffled lazily: enqueuing marks the current permutation stale,
/// and the next operation that depends on random order shuffles once.
/// Between mutations, [`sample`] and [`dequeue`] therefore read from
/// a single frozen permutation instead of re-randomizing every call.
///
/// The slot vector doubles when it fills and halves when occupancy
/// falls to a quarter, so a long enqueue/dequeue sequence costs
/// amortized O(1) per operation.
///
/// [`sample`]: #method.sample
/// [`dequeue`]: #method.dequeue
pub struct RandomizedQueue<T> {
    // The live prefix is slots[..len]; every slot at or beyond len is
    // vacant. The vector's length is the queue's capacity and never
    // drops below one slot.
    pub(crate) slots: Vec<Option<T>>,
    // The number of live items.
    len: usize,
    // Set when a mutation has invalidated the current permutation of
    // the live prefix.
    stale: bool,
}

impl<T> fmt::Debug for RandomizedQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list()
            .entries(self.slots[..self.len].iter().flatten())
            .finish()
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> RandomizedQueue<T> {
        RandomizedQueue::new()
    }
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty `RandomizedQueue` with a single vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let q: RandomizedQueue<u32> = RandomizedQueue::new();
    /// assert!(q.is_empty());
    /// assert_eq!(1, q.capacity());
    /// ```
    pub fn new() -> RandomizedQueue<T> {
        RandomizedQueue::with_capacity(1)
    }

    /// Creates an empty `RandomizedQueue` with `capacity` vacant
    /// slots. A capacity of zero is rounded up to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let q: RandomizedQueue<u32> = RandomizedQueue::with_capacity(16);
    /// assert_eq!(16, q.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> RandomizedQueue<T> {
        RandomizedQueue {
            slots: vacant(capacity.max(1)),
            len: 0,
            stale: true,
        }
    }

    /// The number of items in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    ///
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// assert_eq!(2, q.len());
    ///
    /// q.dequeue();
    /// assert_eq!(1, q.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the queue holds no items.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    ///
    /// assert!(q.is_empty());
    ///
    /// q.enqueue(1);
    /// assert!(!q.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    /// The number of slots in the backing vector, live or vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    /// assert_eq!(1, q.capacity());
    ///
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// assert_eq!(2, q.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Add `item` to the queue, doubling the slot vector first when
    /// it is full. Amortized O(1). The current permutation of the
    /// live prefix becomes stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    /// q.enqueue(10);
    /// q.enqueue(20);
    /// assert_eq!(2, q.len());
    /// ```
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.slots.len() {
            let doubled = 2 * self.slots.len();
            self.resize(doubled);
        }

        self.slots[self.len] = Some(item);
        self.len += 1;
        self.stale = true;
    }

    /// Remove and return a uniformly random item, or `None` when the
    /// queue is empty. The vacated slot is cleared, and the slot
    /// vector halves once occupancy falls to exactly a quarter of
    /// capacity (never below one slot). Amortized O(1).
    ///
    /// Successive calls without an intervening `enqueue` consume one
    /// frozen permutation from the end, so a full drain returns each
    /// item exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    /// q.enqueue(1);
    /// q.enqueue(2);
    ///
    /// let mut drained = vec![q.dequeue().unwrap(), q.dequeue().unwrap()];
    /// drained.sort();
    /// assert_eq!(vec![1, 2], drained);
    /// assert_eq!(None, q.dequeue());
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.refresh();

        let item = self.slots[self.len - 1].take();
        debug_assert!(item.is_some());
        self.len -= 1;

        if self.len > 0 && 4 * self.len == self.slots.len() {
            let halved = self.slots.len() / 2;
            self.resize(halved);
        }

        item
    }

    /// Return a uniformly random item without removing it, or `None`
    /// when the queue is empty.
    ///
    /// This takes `&mut self` even though the contents are unchanged:
    /// a stale permutation is reshuffled here. Repeated calls between
    /// mutations read the same frozen position, so they return the
    /// same item — the one the next [`dequeue`] would remove.
    ///
    /// [`dequeue`]: #method.dequeue
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    /// q.enqueue(10);
    /// assert_eq!(Some(&10), q.sample());
    /// assert_eq!(1, q.len());
    /// ```
    pub fn sample(&mut self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.refresh();
        self.slots[self.len - 1].as_ref()
    }

    /// Create an iterator over the items in a freshly drawn random
    /// order. Every call shuffles its own permutation, independent of
    /// the queue's internal order and of any other iterator, so two
    /// live iterators traverse the same items in different orders.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomizedQueue;
    ///
    /// let mut q = RandomizedQueue::new();
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// q.enqueue(3);
    ///
    /// let mut v: Vec<u8> = q.iter().copied().collect();
    /// v.sort();
    /// assert_eq!(vec![1, 2, 3], v);
    /// ```
    pub fn iter(&self) -> RandomIter<T> {
        RandomIter::new(self)
    }

    // Shuffle the live prefix if a mutation has happened since the
    // last shuffle.
    fn refresh(&mut self) {
        if self.stale {
            fisher_yates(&mut self.slots[..self.len], &mut rand::thread_rng());
            self.stale = false;
        }
    }

    // Replace the backing vector with a fresh one of `capacity`
    // slots, moving only the live prefix across.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len && capacity >= 1);

        let mut next = vacant(capacity);
        for (fresh, old) in next.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *fresh = old.take();
        }
        self.slots = next;
    }
}

fn vacant<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        for item in iter {
            q.enqueue(item);
        }
        q
    }
}
