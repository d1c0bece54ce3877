use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sardine_core::FortunePool;

pub fn run(fortunes: Option<&Path>, count: usize, seed: Option<u64>) -> Result<(), String> {
    let fortunes = super::load_fortunes(fortunes)?;
    let seed = super::resolve_seed(seed);
    let cycle = fortunes.len();
    let mut pool = FortunePool::new(fortunes);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("  Drawing {count} from {cycle} fortunes (seed {seed})\n");

    for i in 0..count {
        if i > 0 && i % cycle == 0 {
            println!("  --- cycle {} ---", i / cycle + 1);
        }
        let text = pool.draw_fortune(&mut rng);
        println!("  {:>3}. {text}", i + 1);
    }

    Ok(())
}
