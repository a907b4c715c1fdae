extern crate std;

mod model;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
