fn main() {
    amaze::run();
}
