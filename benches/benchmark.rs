use campaign_topic_classifier::topic_classifier::TopicClassifier;
use std::time::Instant;

fn main() {
    let classifier = TopicClassifier::new();
    let comments = [
        "esa animación con ia es una pereza, contraten un animador",
        "me encanta mucho este producto nuevo",
        "tiene mucho sodio y azúcar, deberían poner los octágonos",
        "vi el video completo ayer",
        "jajaja",
        "cuánto vale ahora el kumis de alpina",
    ];

    let start = Instant::now();
    for _ in 0..10000 {
        for comment in &comments {
            classifier.classify(comment);
        }
    }
    let duration = start.elapsed();
    println!("Time taken: {:?}", duration);
}
