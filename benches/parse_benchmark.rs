use cobble::argparse::{Arg, Choice, Command, FlagSlot, Opt, ValueSlot};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_parse(c: &mut Criterion) {
    let build = FlagSlot::new(false);
    let run = FlagSlot::new(false);
    let help = FlagSlot::new(false);
    let config = ValueSlot::new(None);
    let target = ValueSlot::new(None);

    let program = Command::new("bench", "Benchmark tree")
        .opt(Opt::flag("help", "Prints this message", &help).short('h'))
        .sub(
            Command::new("build", "Builds the project")
                .selected(&build)
                .opt(
                    Opt::switch("config", "Build configuration", &config)
                        .choice(Choice::new("debug", "Debug build").short('d'))
                        .choice(Choice::new("release", "Release build").short('r'))
                        .default_choice("debug"),
                )
                .arg(Arg::new("target", "Target to build", &target).default_value("all")),
        )
        .sub(Command::new("run", "Runs the project").selected(&run));

    c.bench_function("parse_subcommand_argv", |b| {
        b.iter(|| program.parse(black_box(["build", "--release", "core", "--unknown"])))
    });

    c.bench_function("parse_empty_argv", |b| {
        b.iter(|| program.parse(black_box(Vec::<String>::new())))
    });
}

fn bench_usage(c: &mut Criterion) {
    let help = FlagSlot::new(false);
    let config = ValueSlot::new(None);
    let target = ValueSlot::new(None);
    let build = FlagSlot::new(false);

    let program = Command::new("bench", "Benchmark tree")
        .opt(Opt::flag("help", "Prints this message", &help).short('h'))
        .opt(
            Opt::switch("config", "Build configuration", &config)
                .choice(Choice::new("debug", "Debug build").short('d'))
                .choice(Choice::new("release", "Release build").short('r')),
        )
        .arg(Arg::new("target", "Target to build", &target).default_value("all"))
        .sub(Command::new("build", "Builds the project").selected(&build));

    c.bench_function("render_usage", |b| b.iter(|| black_box(&program).usage()));
}

criterion_group!(benches, bench_parse, bench_usage);
criterion_main!(benches);
