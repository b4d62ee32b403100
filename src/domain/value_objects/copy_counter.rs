/// Position of one printed copy within a label run, shown as `"i/N"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyCounter {
    index: u32,
    count: u32,
}

impl CopyCounter {
    /// `index` is 1-based and must not exceed `count`.
    pub fn new(index: u32, count: u32) -> Self {
        debug_assert!(index >= 1 && index <= count, "copy {index} of {count}");
        Self { index, count }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    /// Every counter of a run of `count` copies, in order
    pub fn run(count: u32) -> impl Iterator<Item = CopyCounter> {
        (1..=count).map(move |index| CopyCounter::new(index, count))
    }
}

impl std::fmt::Display for CopyCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.index, self.count)
    }
}
