use blackjack::{EdgeResult, Paytable, SideBetEdgeCalculator};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "edge-calc",
    about = "Calculate side-bet house edge for a shoe size and paytable"
)]
struct Args {
    /// Number of decks in the shoe
    #[arg(long, default_value = "6")]
    num_decks: u8,

    /// Insurance multiplier
    #[arg(long, default_value = "2")]
    insurance: u32,

    /// Perfect Pairs multipliers as mixed:colored:perfect
    #[arg(long, default_value = "5:12:25")]
    perfect_pairs: String,

    /// 21+3 multipliers as flush:straight:trips:straight_flush:suited_trips
    #[arg(long, default_value = "5:10:30:40:100")]
    poker: String,

    /// Lucky Ladies multipliers as any:suited:matched:qh_pair:qh_pair_dealer_bj
    #[arg(long, default_value = "4:10:25:200:1000")]
    lucky_ladies: String,
}

fn main() {
    let args = Args::parse();

    if args.num_decks == 0 {
        eprintln!("Number of decks must be at least 1");
        std::process::exit(1);
    }

    let paytable = paytable(&args);

    eprintln!("Configuration:");
    eprintln!("  Decks:          {}", args.num_decks);
    eprintln!("  Insurance:      {}:1", paytable.insurance);
    eprintln!("  Perfect Pairs:  {}", args.perfect_pairs);
    eprintln!("  21+3:           {}", args.poker);
    eprintln!("  Lucky Ladies:   {}", args.lucky_ladies);
    eprintln!("Calculating...");

    let edges = SideBetEdgeCalculator::new(args.num_decks, paytable).calculate();

    print_result("Insurance", &edges.insurance);
    print_result("Perfect Pairs", &edges.perfect_pairs);
    print_result("21+3", &edges.poker);
    print_result("Lucky Ladies", &edges.lucky_ladies);
}

fn paytable(args: &Args) -> Paytable {
    let mut paytable = Paytable {
        insurance: args.insurance,
        ..Paytable::default()
    };

    let [mixed, colored, perfect] = parse_multipliers::<3>(&args.perfect_pairs);
    paytable.perfect_pairs.mixed = mixed;
    paytable.perfect_pairs.colored = colored;
    paytable.perfect_pairs.perfect = perfect;

    let [flush, straight, trips, straight_flush, suited_trips] = parse_multipliers::<5>(&args.poker);
    paytable.poker.flush = flush;
    paytable.poker.straight = straight;
    paytable.poker.three_of_a_kind = trips;
    paytable.poker.straight_flush = straight_flush;
    paytable.poker.suited_three_of_a_kind = suited_trips;

    let [any, suited, matched, qh_pair, qh_pair_dealer_bj] =
        parse_multipliers::<5>(&args.lucky_ladies);
    paytable.lucky_ladies.any_twenty = any;
    paytable.lucky_ladies.suited_twenty = suited;
    paytable.lucky_ladies.matched_twenty = matched;
    paytable.lucky_ladies.queen_of_hearts_pair = qh_pair;
    paytable.lucky_ladies.queen_of_hearts_pair_dealer_blackjack = qh_pair_dealer_bj;

    paytable
}

fn print_result(name: &str, result: &EdgeResult) {
    println!(
        "{name:<14} hit {:>8.4}%  return {:+.4}%  house edge {:+.4}%",
        result.hit_frequency * 100.0,
        result.expected_return * 100.0,
        result.house_edge * 100.0
    );
}

fn parse_multipliers<const N: usize>(s: &str) -> [u32; N] {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != N {
        eprintln!("Invalid paytable '{s}', expected {N} values separated by ':'");
        std::process::exit(1);
    }
    let mut values = [0; N];
    for (value, part) in values.iter_mut().zip(parts) {
        *value = part.trim().parse().unwrap_or_else(|_| {
            eprintln!("Invalid multiplier '{part}' in paytable '{s}'");
            std::process::exit(1);
        });
    }
    values
}
