use anyhow::Result;
use swipe_demo::{parse_script, RealtimeClock, SwipeList};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let script = parse_script(std::env::args().skip(1))?;
    let mut list = SwipeList::new(1..=5);
    let mut clock = RealtimeClock::new();

    println!("=== Swipeable list ===");
    println!("Gestures are <row>:<percentage>[:<velocity>], e.g. 0:0.5 2:-0.4");
    println!("start: {:?}", list.items());

    for gesture in script {
        list.swipe(gesture)?;
        let frames = list.settle(&mut clock);
        println!("{gesture:?} -> {:?} ({frames} frames)", list.items());
    }
    Ok(())
}
