fn main() {
    roadwatch::start();
}
