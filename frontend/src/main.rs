fn main() {
    loginform_frontend::start();
}
