use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata for `slack-notifier --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
