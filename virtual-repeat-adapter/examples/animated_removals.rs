use virtual_repeat::RepeatOptions;
use virtual_repeat_adapter::{Controller, SlotHost};

fn main() {
    // Example: a controller whose host animates removals for 150ms.
    //
    // An adapter would:
    // - forward data edits (splice/push/remove) and scroll events
    // - call tick(now_ms) in a frame loop / timer until the controller settles
    // - render `host().rendered()` plus the two buffers
    let host = SlotHost::new(32, 480).with_removal_duration(150);
    let mut c = Controller::new(RepeatOptions::new(480), host);
    c.replace_items((0..500u32).collect(), 0);
    println!("bound: {:?}", c.state());

    let status = c.remove(3, 0).expect("row 3 exists");
    println!("remove(3) -> {status:?}");
    println!("push -> {:?}", c.push(500, 16));
    println!("scroll applied: {}", c.on_scroll(32 * 40));

    let mut now_ms = 0u64;
    while !c.is_settled() {
        now_ms += 16;
        if let Some(status) = c.tick(now_ms).expect("only outstanding removals are reported") {
            println!("t={now_ms} {status:?}");
        }
    }

    let state = c.state();
    println!("settled: {state:?}");
    println!("stats: {:?}", c.host().stats());
    let first: Vec<u32> = c.host().rendered().take(5).map(|v| *v.item).collect();
    println!("first rendered: {first:?}");
}
