// Example: a recording host, one wholesale bind and a few splices.
use virtual_repeat::{Removal, Reconciler, RepeatOptions, Splice, ViewContext, ViewHost};

#[derive(Default)]
struct PrintHost {
    views: Vec<(String, ViewContext)>,
}

impl ViewHost<String> for PrintHost {
    fn view_count(&self) -> usize {
        self.views.len()
    }

    fn insert_view(&mut self, position: usize, item: &String, context: ViewContext) {
        println!("  insert  #{position} {item}");
        self.views.insert(position, (item.clone(), context));
    }

    fn remove_view(
        &mut self,
        position: usize,
        _return_to_cache: bool,
        _skip_animation: bool,
    ) -> Removal {
        println!("  remove  #{position}");
        self.views.remove(position);
        Removal::Done
    }

    fn move_view(&mut self, from: usize, to: usize) {
        println!("  move    #{from} -> #{to}");
        let view = self.views.remove(from);
        self.views.insert(to, view);
    }

    fn rebind_view(&mut self, position: usize, item: &String, context: ViewContext) {
        println!("  rebind  #{position} {item}");
        self.views[position] = (item.clone(), context);
    }

    fn update_context(&mut self, position: usize, context: ViewContext) {
        self.views[position].1 = context;
    }

    fn bound_item(&self, position: usize) -> Option<&String> {
        self.views.get(position).map(|(item, _)| item)
    }

    fn view_context(&self, position: usize) -> Option<ViewContext> {
        self.views.get(position).map(|(_, context)| *context)
    }

    fn measure_item_height(&mut self) -> u32 {
        if self.views.is_empty() {
            return 0;
        }
        24
    }

    fn distance_to_bottom(&self) -> i64 {
        -1
    }

    fn buffers_changed(&mut self, top: u64, bottom: u64) {
        println!("  buffers top={top} bottom={bottom}");
    }
}

fn main() {
    let mut items: Vec<String> = (0..1_000).map(|i| format!("row {i}")).collect();
    let mut host = PrintHost::default();
    let mut rec = Reconciler::new(RepeatOptions::new(120).with_buffer_size(2));

    println!("bind");
    rec.instance_changed(&mut host, &items);
    println!("state={:?}", rec.state(&host));

    println!("scroll to row 500");
    rec.handle_scroll(&mut host, &items, 500 * 24);

    println!("insert 3 rows above the window");
    items.splice(0..0, (0..3).map(|i| format!("new {i}")));
    rec.instance_mutated(&mut host, &items, &[Splice::insert(0, 3)]);

    println!("remove the third rendered row");
    let index = rec.state(&host).first_index + 2;
    items.remove(index);
    rec.instance_mutated(&mut host, &items, &[Splice::remove(index, 1)]);

    let state = rec.state(&host);
    println!("state={state:?}");
    println!("rendered={:?}", state.rendered_range());
    assert_eq!(state.represented_len(), items.len());
}
