use std::io;

use lomuto::trace::{EventLog, LogSink, TextSink};
use lomuto::{DEMO_SEQUENCE, quick_sort};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut data = DEMO_SEQUENCE;
    let mut sink = (TextSink::new(io::stdout().lock()), (LogSink, EventLog::default()));
    quick_sort(&mut data, &mut sink);

    let (text, (_, events)) = sink;
    drop(text.finish()?);
    println!("{data:?}");

    log::info!(
        "sorted {} elements with {} partitions",
        data.len(),
        events.partition_count()
    );
    Ok(())
}
