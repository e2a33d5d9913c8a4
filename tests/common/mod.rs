use std::cell::Cell;

pub fn init() {
    #[cfg(feature = "logger")]
    {
        use std::io::Write;
        let _ = env_logger::builder()
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .is_test(true)
            .try_init();
    }
}

/// Counts how often the closures it hands out are called
#[derive(Default)]
pub struct Calls(Cell<usize>);

impl Calls {
    pub fn tick(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}
