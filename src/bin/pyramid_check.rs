use anyhow::Result;
use clap::Parser;
use pyramid_word::{encode, DefaultEngine, Verdict};

#[derive(Parser)]
#[command(name = "pyramid-check")]
#[command(about = "Classify percent-escaped words without starting the server")]
struct Args {
    /// Raw query strings, as they would appear after `?` in the URL
    #[arg(required = true)]
    words: Vec<String>,

    /// Also print the canonical percent-escaped form of each decoded word
    #[arg(long)]
    show_encoded: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let engine = DefaultEngine::default();

    let mut all_pyramid = true;
    for raw in &args.words {
        // 與 HTTP 服務使用同一套解碼與判斷流程
        let verdict = engine.classify(Some(raw.as_str()));
        println!("{}", verdict.message());

        if args.show_encoded {
            if let Verdict::Pyramid { word } | Verdict::NotPyramid { word } = &verdict {
                println!("   ?{}", encode(word));
            }
        }
        all_pyramid &= verdict.is_pyramid();
    }

    // 只要有一個不是金字塔字就以 1 結束
    if !all_pyramid {
        std::process::exit(1);
    }
    Ok(())
}
