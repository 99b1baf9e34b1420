fn main() {
    portfolio::start();
}
