fn main() {
    betacritic::logs::init_logging();
    yew::Renderer::<betacritic::App>::new().render();
}
