use std::io;

use classic_sorts_rs::harness::{self, RANDOM_LEN, RANDOM_MAX_EXCLUSIVE};

fn main() {
    let seed = harness::seed_from_env();
    log::debug!("Random array seed {}", seed);

    let randoms = match harness::random_values(RANDOM_LEN, RANDOM_MAX_EXCLUSIVE, seed) {
        Ok(randoms) => randoms,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = harness::run_all(&randoms, &mut out) {
        eprintln!("{}", err);
    }
}
