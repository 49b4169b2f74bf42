use chain_hash::HashMap;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Letter to remove after the map is populated.
    #[arg(short = 'r', long = "remove", default_value_t = 'f')]
    remove: char,
}

fn main() {
    let args = Args::parse();

    let mut map: HashMap<char, u32> = HashMap::new();

    for (position, letter) in ('a'..='z').enumerate() {
        map.insert(letter, position as u32 + 1);
    }

    for letter in 'a'..='z' {
        if let Some(position) = map.get(&letter) {
            println!("{letter} -> {position}");
        }
    }

    println!("entries stored: {}", map.len());

    map.remove(&args.remove);
    if map.get(&args.remove).is_none() {
        println!("removed {:?}; key no longer present", args.remove);
    }
    println!("entries stored: {}", map.len());

    map.clear();
    println!("entries after clear: {}", map.len());
}
