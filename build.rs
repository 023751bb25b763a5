use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `notifier-rs --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
